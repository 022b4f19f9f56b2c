//! Ledger entry types
//!
//! Transactions are append-only and immutable once created.

use serde::{Deserialize, Serialize};

/// Source action that produced a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Claimed task reward (including spins)
    TaskReward,
    /// Daily login-bonus claim
    DailyReward,
    /// Achievement unlock bonus
    Achievement,
    /// Cash-out debit
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskReward => "task_reward",
            Self::DailyReward => "daily_reward",
            Self::Achievement => "achievement",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single balance-affecting event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Id of the task, achievement, or cycle day that produced the entry
    pub source: String,
    /// Signed coin amount: positive = credit, negative = debit
    pub amount: i64,
    pub description: String,
    /// Timestamp in ms since epoch
    pub timestamp: i64,
    /// Account balance after applying this entry
    pub balance_after: u64,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        source: impl Into<String>,
        amount: i64,
        description: impl Into<String>,
        timestamp: i64,
        balance_after: u64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            source: source.into(),
            amount,
            description: description.into(),
            timestamp,
            balance_after,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.amount > 0
    }
}
