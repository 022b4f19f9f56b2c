//! Rank tiers derived from lifetime coins earned
//!
//! Defines rank thresholds, multipliers, and lookup helpers.

use serde::{Deserialize, Serialize};

/// Unique identifier for each rank tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankId {
    Rookie,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl RankId {
    /// Get the string ID for snapshot storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rookie => "rookie",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Diamond => "diamond",
        }
    }
}

impl std::fmt::Display for RankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rank definition with all metadata
#[derive(Debug, Clone)]
pub struct Rank {
    pub id: RankId,
    pub name: &'static str,
    pub icon: &'static str,
    /// Lifetime coins required to reach this rank
    pub required_coins: u64,
    /// Display multiplier carried by the rank (reward scaling is opt-in)
    pub multiplier: f64,
}

/// All rank definitions (must be sorted by required_coins ascending)
pub static RANKS: &[Rank] = &[
    Rank {
        id: RankId::Rookie,
        name: "Rookie",
        icon: "🌱",
        required_coins: 0,
        multiplier: 1.0,
    },
    Rank {
        id: RankId::Bronze,
        name: "Bronze",
        icon: "🥉",
        required_coins: 500,
        multiplier: 1.1,
    },
    Rank {
        id: RankId::Silver,
        name: "Silver",
        icon: "🥈",
        required_coins: 2000,
        multiplier: 1.25,
    },
    Rank {
        id: RankId::Gold,
        name: "Gold",
        icon: "🥇",
        required_coins: 5000,
        multiplier: 1.5,
    },
    Rank {
        id: RankId::Platinum,
        name: "Platinum",
        icon: "💎",
        required_coins: 15000,
        multiplier: 1.75,
    },
    Rank {
        id: RankId::Diamond,
        name: "Diamond",
        icon: "👑",
        required_coins: 50000,
        multiplier: 2.0,
    },
];

impl Rank {
    /// Highest rank whose threshold is covered by the lifetime total
    pub fn for_coins(total_coins_earned: u64) -> &'static Rank {
        RANKS
            .iter()
            .rev()
            .find(|r| total_coins_earned >= r.required_coins)
            .unwrap_or(&RANKS[0])
    }

    /// Lowest rank above the lifetime total (None if already at max rank)
    pub fn next_for_coins(total_coins_earned: u64) -> Option<&'static Rank> {
        RANKS.iter().find(|r| total_coins_earned < r.required_coins)
    }

    /// Progress towards the next rank as a percentage (100 at max rank)
    pub fn progress_percent(total_coins_earned: u64) -> f64 {
        let current = Self::for_coins(total_coins_earned);
        let Some(next) = Self::next_for_coins(total_coins_earned) else {
            return 100.0;
        };
        let range = (next.required_coins - current.required_coins) as f64;
        let progress = (total_coins_earned - current.required_coins) as f64;
        (progress / range * 100.0).clamp(0.0, 100.0)
    }

    /// Multiplier of the rank covering the lifetime total
    pub fn multiplier_for(total_coins_earned: u64) -> f64 {
        Self::for_coins(total_coins_earned).multiplier
    }

    /// Get max rank
    pub fn max() -> &'static Rank {
        RANKS.last().unwrap_or(&RANKS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_for_coins() {
        assert_eq!(Rank::for_coins(0).id, RankId::Rookie);
        assert_eq!(Rank::for_coins(499).id, RankId::Rookie);
        assert_eq!(Rank::for_coins(500).id, RankId::Bronze);
        assert_eq!(Rank::for_coins(2000).id, RankId::Silver);
        assert_eq!(Rank::for_coins(49999).id, RankId::Platinum);
        assert_eq!(Rank::for_coins(50000).id, RankId::Diamond);
        assert_eq!(Rank::for_coins(1_000_000).id, RankId::Diamond);
    }

    #[test]
    fn test_next_rank() {
        assert_eq!(Rank::next_for_coins(0).unwrap().id, RankId::Bronze);
        // Exactly at a threshold: next is the tier above
        assert_eq!(Rank::next_for_coins(2000).unwrap().id, RankId::Gold);
        assert!(Rank::next_for_coins(50000).is_none());
    }

    #[test]
    fn test_progress_percent() {
        // Exactly at silver: 0% towards gold
        assert_eq!(Rank::progress_percent(2000), 0.0);
        // Halfway between silver (2000) and gold (5000)
        assert!((Rank::progress_percent(3500) - 50.0).abs() < 1e-9);
        // Max rank pins to 100
        assert_eq!(Rank::progress_percent(80000), 100.0);
    }

    #[test]
    fn test_table_is_sorted() {
        for pair in RANKS.windows(2) {
            assert!(pair[0].required_coins < pair[1].required_coins);
            assert!(pair[0].multiplier <= pair[1].multiplier);
        }
    }
}
