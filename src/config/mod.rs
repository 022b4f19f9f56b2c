//! Runtime policy configuration
//!
//! Behavior that is a product decision rather than an invariant lives here
//! as explicit knobs instead of being buried in the aggregates: streak
//! reset behavior and whether the rank multiplier scales actual credits.

mod io;

pub use io::data_dir;

use serde::{Deserialize, Serialize};

/// When the check-in streak is zeroed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakResetPolicy {
    /// Never auto-reset; missed days leave the counter untouched
    #[default]
    Manual,
    /// Zero the streak during day rollover when a calendar day was missed
    OnMissedDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub streak_reset: StreakResetPolicy,
    /// Scale task and daily-reward credits by the current rank multiplier.
    /// Off by default: the multiplier is display-only.
    pub apply_rank_multiplier: bool,
    /// Coins per withdrawal step; 1000 coins = $1
    pub withdrawal_unit: u64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            streak_reset: StreakResetPolicy::default(),
            apply_rank_multiplier: false,
            withdrawal_unit: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RewardConfig::default();
        assert_eq!(config.streak_reset, StreakResetPolicy::Manual);
        assert!(!config.apply_rank_multiplier);
        assert_eq!(config.withdrawal_unit, 1000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RewardConfig = toml::from_str("apply_rank_multiplier = true").unwrap();
        assert!(config.apply_rank_multiplier);
        assert_eq!(config.withdrawal_unit, 1000);
        assert_eq!(config.streak_reset, StreakResetPolicy::Manual);
    }

    #[test]
    fn test_policy_serialization() {
        let config = RewardConfig {
            streak_reset: StreakResetPolicy::OnMissedDay,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("on_missed_day"));
        let parsed: RewardConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
