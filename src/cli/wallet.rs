//! Withdrawal and history commands

use anyhow::Result;
use chrono::DateTime;

use super::{load_manager, print_events, save_manager};

/// Withdraw coins; defaults to the largest available multiple of the unit
pub fn withdraw_command(coins: Option<u64>) -> Result<()> {
    let (mut manager, store) = load_manager()?;

    let unit = manager.config().withdrawal_unit;
    let amount = match coins {
        Some(amount) => amount,
        None => (manager.account().current_balance / unit) * unit,
    };

    if amount == 0 {
        let missing = unit - manager.account().current_balance % unit;
        println!(
            "You need at least {} RBX to withdraw ({} more to go).",
            unit, missing
        );
        return Ok(());
    }

    match manager.withdraw(amount) {
        Ok(events) => {
            save_manager(&manager, &store)?;
            print_events(&events);
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}

/// Show the transaction history, newest first
pub fn history_command(limit: usize) -> Result<()> {
    let (manager, _store) = load_manager()?;
    let ledger = manager.ledger();

    if ledger.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }

    println!("History ({} of {} entries):\n", limit.min(ledger.len()), ledger.len());
    for txn in ledger.recent().take(limit) {
        let when = DateTime::from_timestamp_millis(txn.timestamp)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let sign = if txn.amount >= 0 { "+" } else { "" };
        println!(
            "  {}  {:<13} {}{:<6} {} (balance: {})",
            when, txn.kind, sign, txn.amount, txn.description, txn.balance_after
        );
    }

    Ok(())
}
