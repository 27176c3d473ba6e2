//! Marbles - Household reward ledger
//!
//! This library implements the transaction ledger core of the marbles
//! reward tracker: two household accounts earn and spend marbles, every
//! movement is an immutable credit or debit appended to a durable log,
//! and the balance and ledger view are derived from the full history on
//! every read.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data directory and log file location
//! - `error`: custom error types
//! - `models`: the transaction model and its closed enums
//! - `storage`: transaction log codec and file-backed store
//! - `reports`: balance aggregation and the ledger register view
//! - `services`: the facade the request-handling layer talks to
//!
//! # Example
//!
//! ```rust,ignore
//! use marbles::{Account, Direction, LedgerService, LedgerStore};
//!
//! let mut store = LedgerStore::new("transactions.json");
//! let mut ledger = LedgerService::new(&mut store);
//!
//! ledger.record_transaction(10, Direction::Credit, Account::Josie, "made her bed")?;
//! println!("balance: {}", ledger.balance()?);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use config::MarblePaths;
pub use error::{MarbleError, MarbleResult};
pub use models::{Account, Direction, Transaction};
pub use reports::{balance, build_register, BalanceSummary, LedgerEntry};
pub use services::LedgerService;
pub use storage::LedgerStore;
