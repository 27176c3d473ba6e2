//! Ledger register view
//!
//! Projects the raw transaction history into display-ready entries. The
//! projection keeps the input order exactly; it never re-sorts by
//! timestamp and never filters.

use chrono::DateTime;

use crate::models::{Account, Direction, Transaction};

/// Fixed pattern for the human-readable timestamp column (rendered in UTC)
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %I:%M%p %Y";

/// A single display-ready row of the ledger view
///
/// A lightweight projection built from decoded data; the display path
/// never constructs full transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Number of marbles moved
    pub amount: u32,
    /// Credit or debit, for display labeling
    pub direction: Direction,
    /// The account the movement belongs to
    pub account: Account,
    /// Creation time rendered with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    /// Empty when the transaction carried no note
    pub description: String,
}

impl From<&Transaction> for LedgerEntry {
    fn from(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount,
            direction: txn.direction,
            account: txn.account,
            timestamp: human_time(txn.timestamp),
            description: txn.description.clone(),
        }
    }
}

/// Build the ledger view, one entry per transaction in stored order
pub fn build_register(transactions: &[Transaction]) -> Vec<LedgerEntry> {
    transactions.iter().map(LedgerEntry::from).collect()
}

/// Render an epoch timestamp with the fixed display pattern
///
/// Timestamps outside chrono's representable range fall back to the raw
/// second count.
fn human_time(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => format!("@{}", timestamp),
    }
}

/// Format entries as a plain-text register table
pub fn format_register(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:24} {:8} {:>7} {:6}  {}\n",
        "Date", "Account", "Marbles", "Type", "Description"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{:24} {:8} {:>7} {:6}  {}\n",
            entry.timestamp,
            entry.account.to_string(),
            entry.amount,
            entry.direction.to_string(),
            entry.description
        ));
    }

    output
}
