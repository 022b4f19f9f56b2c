//! Append-only transaction ledger
//!
//! Entries are stored in creation order, which is the audit source of
//! truth; display iterates newest-first.

use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries are immutable once recorded.
    pub(crate) fn append(
        &mut self,
        kind: TransactionKind,
        source: impl Into<String>,
        amount: i64,
        description: impl Into<String>,
        timestamp: i64,
        balance_after: u64,
    ) -> &Transaction {
        let txn = Transaction::new(kind, source, amount, description, timestamp, balance_after);
        tracing::debug!("Ledger append: {} {} -> {}", txn.kind, txn.amount, txn.balance_after);
        self.entries.push(txn);
        self.entries.last().expect("Just pushed")
    }

    /// Entries in creation order
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Entries newest-first for display
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Net sum of all signed amounts. For a ledger that starts from a zero
    /// balance this reconciles exactly with the account's current balance.
    pub fn net_total(&self) -> i64 {
        self.entries.iter().map(|t| t.amount).sum()
    }

    pub fn any_of_kind(&self, kind: TransactionKind) -> bool {
        self.entries.iter().any(|t| t.kind == kind)
    }
}
