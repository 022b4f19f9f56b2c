//! CLI command implementations

pub mod earn;
pub mod profile;
pub mod status;
pub mod wallet;

use anyhow::{Result, bail};

use rbxtask::config::RewardConfig;
use rbxtask::domain::TaskId;
use rbxtask::rewards::{RewardEvent, RewardManager};
use rbxtask::storage::SnapshotStore;

/// Load the persisted state (or start fresh) together with its store
pub fn load_manager() -> Result<(RewardManager, SnapshotStore)> {
    let config = RewardConfig::load()?;
    let store = SnapshotStore::open_default();
    let manager = match store.load()? {
        Some(snapshot) => RewardManager::from_snapshot(snapshot, config),
        None => RewardManager::new(config),
    };
    Ok((manager, store))
}

/// Persist the manager's state
pub fn save_manager(manager: &RewardManager, store: &SnapshotStore) -> Result<()> {
    store.save(&manager.to_snapshot())
}

/// Resolve a task id argument, listing the catalog on a miss
pub fn parse_task(arg: &str) -> Result<TaskId> {
    match TaskId::from_str(arg) {
        Some(id) => Ok(id),
        None => {
            let known: Vec<&str> = TaskId::all().iter().map(|t| t.as_str()).collect();
            bail!("Unknown task '{}'. Known tasks: {}", arg, known.join(", "));
        }
    }
}

/// Print reward events in occurrence order
pub fn print_events(events: &[RewardEvent]) {
    for event in events {
        match event {
            RewardEvent::TaskClaimed { task, amount, balance_after } => {
                println!("+{amount} RBX for {task} (balance: {balance_after})");
            }
            RewardEvent::SpinLanded { amount, .. } => {
                println!("The wheel landed on {amount} RBX!");
            }
            RewardEvent::DailyRewardClaimed { day, amount, balance_after } => {
                println!("Day {day} reward claimed: +{amount} RBX (balance: {balance_after})");
            }
            RewardEvent::StreakExtended { count } => {
                println!("Check-in streak: {count} day(s)");
            }
            RewardEvent::AchievementUnlocked { achievement, .. } => {
                println!(
                    "Achievement unlocked: {} (+{} RBX)",
                    achievement.title, achievement.reward
                );
            }
            RewardEvent::Withdrawn { coins, dollars, balance_after } => {
                println!("Withdrew {coins} RBX (${dollars:.2}); balance: {balance_after}");
            }
        }
    }
}
