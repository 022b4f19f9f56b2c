//! Business-error taxonomy for reward operations
//!
//! All variants are expected, recoverable conditions; corrupted snapshots
//! and invariant violations abort loudly at the storage edge instead.

use crate::domain::TaskId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RewardError {
    #[error("Unknown task: {0}")]
    TaskNotFound(String),

    #[error("Task not completed yet: {0}")]
    TaskNotCompleted(TaskId),

    #[error("Reward already claimed: {0}")]
    AlreadyClaimed(TaskId),

    #[error("Daily reward already claimed today")]
    AlreadyClaimedToday,

    #[error("Insufficient balance: have {available}, need {requested}")]
    InsufficientBalance { available: u64, requested: u64 },

    #[error("Withdrawal amount must be a positive multiple of {unit} coins")]
    InvalidWithdrawalAmount { unit: u64 },
}
