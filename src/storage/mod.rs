//! Storage layer for the marbles ledger
//!
//! Provides the transaction log codec and a file-backed store with atomic
//! full-file rewrites.

pub mod codec;
pub mod file_io;
pub mod store;

pub use file_io::{read_optional, write_atomic};
pub use store::LedgerStore;
