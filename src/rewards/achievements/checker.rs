//! Achievement checking logic
//!
//! Pure predicates over a progress snapshot. Each function returns the
//! achievements that newly qualify; already-unlocked ids are skipped so
//! repeated evaluation never double-unlocks.

use super::definitions::AchievementId;
use super::manager::AchievementLog;

/// Aggregated state the rules are evaluated against
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressSnapshot {
    /// Lifetime coins earned (drives coin and rank milestones)
    pub total_coins: u64,
    /// Current check-in streak in days
    pub streak: u32,
    /// Daily-category tasks claimed today
    pub tasks_completed_today: usize,
    pub total_daily_tasks: usize,
    pub has_spun: bool,
    pub has_shared: bool,
    pub has_withdrawn: bool,
}

/// Check the one-time "first" achievements (6 achievements)
pub fn check_first_achievements(
    snapshot: &ProgressSnapshot,
    log: &AchievementLog,
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if snapshot.total_coins > 0 && !log.is_unlocked(AchievementId::FirstCoin) {
        newly_unlocked.push(AchievementId::FirstCoin);
    }
    if snapshot.tasks_completed_today > 0 && !log.is_unlocked(AchievementId::FirstTask) {
        newly_unlocked.push(AchievementId::FirstTask);
    }
    if snapshot.total_daily_tasks > 0
        && snapshot.tasks_completed_today >= snapshot.total_daily_tasks
        && !log.is_unlocked(AchievementId::AllDaily)
    {
        newly_unlocked.push(AchievementId::AllDaily);
    }
    if snapshot.has_spun && !log.is_unlocked(AchievementId::FirstSpin) {
        newly_unlocked.push(AchievementId::FirstSpin);
    }
    if snapshot.has_shared && !log.is_unlocked(AchievementId::FirstShare) {
        newly_unlocked.push(AchievementId::FirstShare);
    }
    if snapshot.has_withdrawn && !log.is_unlocked(AchievementId::FirstWithdraw) {
        newly_unlocked.push(AchievementId::FirstWithdraw);
    }

    newly_unlocked
}

/// Check coin-total milestones (5 achievements)
pub fn check_coin_achievements(total_coins: u64, log: &AchievementLog) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (100, AchievementId::Coins100),
        (500, AchievementId::Coins500),
        (1000, AchievementId::Coins1000),
        (5000, AchievementId::Coins5000),
        (10000, AchievementId::Coins10000),
    ];

    for (threshold, id) in milestones {
        if total_coins >= threshold && !log.is_unlocked(id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Check streak milestones (4 achievements)
pub fn check_streak_achievements(streak: u32, log: &AchievementLog) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (3, AchievementId::Streak3),
        (7, AchievementId::Streak7),
        (14, AchievementId::Streak14),
        (30, AchievementId::Streak30),
    ];

    for (threshold, id) in milestones {
        if streak >= threshold && !log.is_unlocked(id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Check rank milestones (5 achievements). Thresholds match the rank table.
pub fn check_rank_achievements(total_coins: u64, log: &AchievementLog) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (500, AchievementId::RankBronze),
        (2000, AchievementId::RankSilver),
        (5000, AchievementId::RankGold),
        (15000, AchievementId::RankPlatinum),
        (50000, AchievementId::RankDiamond),
    ];

    for (threshold, id) in milestones {
        if total_coins >= threshold && !log.is_unlocked(id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}
