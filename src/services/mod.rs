//! Service layer for the marbles ledger
//!
//! The service layer provides the write and read entry points the
//! request-handling layer talks to, on top of the storage layer.

pub mod ledger;

pub use ledger::LedgerService;
