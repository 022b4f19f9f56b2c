//! Achievement manager: unlock bookkeeping and idempotent evaluation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::checker::{
    ProgressSnapshot, check_coin_achievements, check_first_achievements, check_rank_achievements,
    check_streak_achievements,
};
use super::definitions::{Achievement, AchievementId};

/// An achievement that was just unlocked
#[derive(Debug, Clone)]
pub struct UnlockedAchievement {
    pub achievement: &'static Achievement,
    pub unlocked_at: i64,
}

/// Persistent unlock state, keyed by achievement string id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementLog {
    unlocked: BTreeMap<String, i64>,
}

impl AchievementLog {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(id.as_str())
    }

    /// Record an unlock. Returns false if it was already recorded, so the
    /// reward can never be credited twice.
    pub(crate) fn unlock(&mut self, id: AchievementId, now_ms: i64) -> bool {
        self.unlocked.insert(id.as_str().to_string(), now_ms).is_none()
    }

    pub fn unlocked_at(&self, id: AchievementId) -> Option<i64> {
        self.unlocked.get(id.as_str()).copied()
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

/// Evaluates the rule catalog against progress snapshots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementManager {
    log: AchievementLog,
}

impl AchievementManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &AchievementLog {
        &self.log
    }

    /// Run every rule against the snapshot and unlock whatever newly
    /// qualifies. Safe to call repeatedly with the same or a grown
    /// snapshot; each achievement unlocks at most once. The caller credits
    /// the returned rewards.
    pub fn evaluate(&mut self, snapshot: &ProgressSnapshot, now_ms: i64) -> Vec<UnlockedAchievement> {
        let mut newly_unlocked = Vec::new();

        newly_unlocked.extend(check_first_achievements(snapshot, &self.log));
        newly_unlocked.extend(check_coin_achievements(snapshot.total_coins, &self.log));
        newly_unlocked.extend(check_streak_achievements(snapshot.streak, &self.log));
        newly_unlocked.extend(check_rank_achievements(snapshot.total_coins, &self.log));

        let mut events = Vec::with_capacity(newly_unlocked.len());
        for id in newly_unlocked {
            if self.log.unlock(id, now_ms) {
                tracing::debug!("Achievement unlocked: {}", id);
                events.push(UnlockedAchievement {
                    achievement: Achievement::get(id),
                    unlocked_at: now_ms,
                });
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut manager = AchievementManager::new();
        let snapshot = ProgressSnapshot {
            total_coins: 150,
            tasks_completed_today: 1,
            total_daily_tasks: 3,
            ..Default::default()
        };

        let first = manager.evaluate(&snapshot, 1000);
        let ids: Vec<_> = first.iter().map(|u| u.achievement.id).collect();
        assert_eq!(
            ids,
            vec![AchievementId::FirstCoin, AchievementId::FirstTask, AchievementId::Coins100]
        );

        // Unchanged snapshot: nothing new
        assert!(manager.evaluate(&snapshot, 2000).is_empty());
        assert_eq!(manager.log().unlocked_count(), 3);
        assert_eq!(manager.log().unlocked_at(AchievementId::FirstCoin), Some(1000));
    }

    #[test]
    fn test_growing_snapshot_unlocks_more() {
        let mut manager = AchievementManager::new();
        manager.evaluate(
            &ProgressSnapshot { total_coins: 100, ..Default::default() },
            1,
        );
        let later = manager.evaluate(
            &ProgressSnapshot { total_coins: 600, ..Default::default() },
            2,
        );
        let ids: Vec<_> = later.iter().map(|u| u.achievement.id).collect();
        assert_eq!(ids, vec![AchievementId::Coins500, AchievementId::RankBronze]);
    }
}
