//! Core data models for the marbles ledger
//!
//! This module contains the transaction model and the closed enums for
//! transaction direction and household account.

pub mod transaction;

pub use transaction::{Account, Direction, Transaction};
