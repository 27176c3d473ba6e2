//! Custom error types for the marbles ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. I/O failures are wrapped at the call
//! site so the read and write paths stay distinguishable to callers.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum MarbleError {
    /// The durable store exists but its contents cannot be parsed
    #[error("Malformed transaction log: {0}")]
    MalformedLog(String),

    /// The durable store could not be read
    #[error("Store read error: {0}")]
    StoreRead(String),

    /// The durable store could not be written
    #[error("Store write error: {0}")]
    StoreWrite(String),

    /// Raw input could not be turned into a transaction
    #[error("Validation error: {0}")]
    Validation(String),

    /// Data directory resolution or creation failed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MarbleError {
    /// Check if this is a malformed-log error
    pub fn is_malformed_log(&self) -> bool {
        matches!(self, Self::MalformedLog(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an I/O-level store error (read or write)
    pub fn is_store_io(&self) -> bool {
        matches!(self, Self::StoreRead(_) | Self::StoreWrite(_))
    }
}

/// Result type alias for ledger operations
pub type MarbleResult<T> = Result<T, MarbleError>;
