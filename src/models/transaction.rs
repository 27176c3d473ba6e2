//! Transaction model
//!
//! Represents a single marble movement: an immutable credit or debit
//! attributed to one of the two household accounts.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::MarbleError;

/// Direction of a transaction's effect on the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Marbles earned; increases the balance
    Credit,
    /// Marbles spent; decreases the balance
    Debit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "Credit"),
            Self::Debit => write!(f, "Debit"),
        }
    }
}

impl FromStr for Direction {
    type Err = MarbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CREDIT" => Ok(Self::Credit),
            "DEBIT" => Ok(Self::Debit),
            other => Err(MarbleError::Validation(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

/// The household account a movement is attributed to
///
/// A fixed two-member set. Every consumer matches exhaustively, so adding
/// a member is a compile error until all consumers handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Account {
    Josie,
    Audra,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Josie => write!(f, "Josie"),
            Self::Audra => write!(f, "Audra"),
        }
    }
}

impl FromStr for Account {
    type Err = MarbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JOSIE" => Ok(Self::Josie),
            "AUDRA" => Ok(Self::Audra),
            other => Err(MarbleError::Validation(format!(
                "Unknown account: {}",
                other
            ))),
        }
    }
}

/// A single ledger event
///
/// Constructed once by the write path and never mutated afterwards. The
/// amount is unsigned; the sign of its effect on the balance comes solely
/// from `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Number of marbles moved
    pub amount: u32,

    /// Seconds since the Unix epoch, assigned at creation
    #[serde(rename = "time")]
    pub timestamp: i64,

    /// Whether this movement credits or debits the balance
    #[serde(rename = "type")]
    pub direction: Direction,

    /// The account the movement belongs to
    pub account: Account,

    /// Free-form note; empty means absent and is not persisted
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(
        amount: u32,
        direction: Direction,
        account: Account,
        description: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(amount, direction, account, Utc::now().timestamp(), description)
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(
        amount: u32,
        direction: Direction,
        account: Account,
        timestamp: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            timestamp,
            direction,
            account,
            description: description.into(),
        }
    }

    /// Check whether this transaction carries a note
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Signed effect of this transaction on the balance
    pub fn signed_amount(&self) -> i64 {
        match self.direction {
            Direction::Credit => i64::from(self.amount),
            Direction::Debit => -i64::from(self.amount),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} marbles ({})",
            self.direction, self.amount, self.account
        )
    }
}
