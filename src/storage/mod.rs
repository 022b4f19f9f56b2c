//! Snapshot persistence for the reward state tree
//!
//! The whole state tree is persisted as one versioned JSON document at
//! `~/.rbxtask/snapshot.json`. Writes go through a lock file and an atomic
//! temp-file rename so a crash mid-save never corrupts the snapshot.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::UserAccount;
use crate::rewards::{AchievementManager, DailyRewardCycle, TaskBoard, TransactionLedger};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// The full persisted state tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub account: UserAccount,
    pub board: TaskBoard,
    pub cycle: DailyRewardCycle,
    pub achievements: AchievementManager,
    pub ledger: TransactionLedger,
}

impl Snapshot {
    pub fn new(
        account: UserAccount,
        board: TaskBoard,
        cycle: DailyRewardCycle,
        achievements: AchievementManager,
        ledger: TransactionLedger,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            account,
            board,
            cycle,
            achievements,
            ledger,
        }
    }
}

/// Loads and saves snapshots at a fixed path
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store at the default location (~/.rbxtask/snapshot.json)
    pub fn open_default() -> Self {
        Self::new(crate::config::data_dir().join("snapshot.json"))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot. Returns None when no snapshot exists
    /// yet; corrupted or future-versioned snapshots fail loudly instead of
    /// being silently replaced.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read snapshot: {}", self.path.display()))?;

        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", self.path.display()))?;

        if snapshot.version > SNAPSHOT_VERSION {
            bail!(
                "Snapshot version {} is newer than supported version {}",
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }

        Ok(Some(snapshot))
    }

    /// Save a snapshot with file locking and an atomic write.
    ///
    /// This ensures:
    /// 1. Exclusive lock prevents concurrent writes from multiple processes
    /// 2. Atomic write (temp file + rename) prevents corruption on crash
    /// 3. Parent directory is created if needed
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create snapshot directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;

        // Lock file is separate from the snapshot to avoid issues with rename
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .context("Failed to acquire snapshot lock")?;

        // Write to temp file first (atomic write pattern)
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write snapshot content")?;

        temp_file.sync_all().context("Failed to sync snapshot file")?;

        // Atomic rename (overwrites existing file)
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename snapshot file: {}", self.path.display()))?;

        tracing::debug!("Snapshot saved to {}", self.path.display());
        // Lock is released when lock_file is dropped
        Ok(())
    }

    /// Delete the persisted snapshot (reset to a fresh account)
    pub fn delete(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to delete snapshot: {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewardConfig;
    use crate::domain::TaskId;
    use crate::rewards::RewardManager;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"));

        let mut manager = RewardManager::new(RewardConfig::default());
        manager.complete_task(TaskId::DailyCheckin);
        manager.claim_task(TaskId::DailyCheckin).unwrap();

        store.save(&manager.to_snapshot()).unwrap();

        let loaded = store.load().unwrap().expect("snapshot should exist");
        assert_eq!(loaded.version, SNAPSHOT_VERSION);
        assert_eq!(loaded.account.current_balance, 75);
        assert_eq!(loaded.ledger.len(), 3);
        assert_eq!(loaded.board.checkin_streak(), 1);
    }

    #[test]
    fn test_corrupted_snapshot_fails_loudly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = SnapshotStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_future_version_is_rejected() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"));

        let manager = RewardManager::new(RewardConfig::default());
        let mut snapshot = manager.to_snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        store.save(&snapshot).unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"));
        let manager = RewardManager::new(RewardConfig::default());
        store.save(&manager.to_snapshot()).unwrap();

        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
        // Deleting twice is fine
        store.delete().unwrap();
    }
}
