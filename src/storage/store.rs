//! Durable ledger store
//!
//! Owns the on-disk transaction log. The only mutating operation is
//! `append`, which re-reads the full history, adds one entry, and
//! atomically rewrites the whole file.

use std::path::{Path, PathBuf};

use crate::config::MarblePaths;
use crate::error::MarbleResult;
use crate::models::Transaction;

use super::codec;
use super::file_io::{read_optional, write_atomic};

/// Handle to the durable transaction log
///
/// The log assumes at most one active writer: `append` takes `&mut self`,
/// so the exclusive borrow enforces that within a process. Reads may run
/// concurrently with each other.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store over the given log file
    ///
    /// The file does not need to exist yet; it is created on the first
    /// append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the configured default location
    pub fn from_paths(paths: &MarblePaths) -> Self {
        Self::new(paths.ledger_file())
    }

    /// The log file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and decode the full transaction history
    ///
    /// A store that does not exist yet is an empty history. An existing
    /// but unparseable store is a malformed-log error, never an empty
    /// result.
    pub fn read_all(&self) -> MarbleResult<Vec<Transaction>> {
        match read_optional(&self.path)? {
            Some(bytes) => codec::decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    /// Append one transaction and rewrite the whole log
    ///
    /// All prior entries keep their order. On failure the store holds its
    /// pre-call contents and the caller is informed the transaction was
    /// not recorded.
    pub fn append(&mut self, transaction: Transaction) -> MarbleResult<()> {
        let mut transactions = self.read_all()?;
        transactions.push(transaction);

        let encoded = codec::encode(&transactions)?;
        write_atomic(&self.path, encoded.as_bytes())
    }
}
