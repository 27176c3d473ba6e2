//! Balance aggregation
//!
//! Folds the full transaction history into a single signed marble count,
//! plus the derived front-page figures.

use crate::models::Transaction;

/// Marbles needed to earn one movie
pub const MARBLES_PER_MOVIE: i64 = 90;

/// Compute the signed balance over a transaction sequence
///
/// Credits add, debits subtract. The fold runs left to right over the
/// stored order and the result may go negative; there is no floor at
/// zero. Pure function of its input.
pub fn balance(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .fold(0, |total, txn| total + txn.signed_amount())
}

/// Derived balance figures for the front page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSummary {
    /// Net marbles across the full history
    pub balance: i64,
    /// Whole movies the current balance is worth (truncated toward zero)
    pub movies_earned: i64,
}

impl BalanceSummary {
    /// Summarize a transaction sequence
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let balance = balance(transactions);
        Self {
            balance,
            movies_earned: balance / MARBLES_PER_MOVIE,
        }
    }
}
