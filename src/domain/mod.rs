//! Core domain types for RBX Task

mod account;
mod rank;
mod task;
mod transaction;

pub use account::{COINS_PER_DOLLAR, UserAccount, generate_referral_code};
pub use rank::{RANKS, Rank, RankId};
pub use task::{TASKS, TaskCategory, TaskDef, TaskId, TaskState};
pub use transaction::{Transaction, TransactionKind};
