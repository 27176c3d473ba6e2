//! Ledger service
//!
//! Business-logic facade over the ledger store: the three calls the
//! request-handling layer needs (record a transaction, read the balance,
//! read the ledger view). Every call re-reads the durable log in full;
//! no history is cached between calls.

use crate::error::MarbleResult;
use crate::models::{Account, Direction, Transaction};
use crate::reports::{balance, build_register, BalanceSummary, LedgerEntry};
use crate::storage::LedgerStore;

/// Service for recording and viewing marble movements
pub struct LedgerService<'a> {
    store: &'a mut LedgerStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service over a store
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    /// Record a new transaction at the current time
    ///
    /// The description is trimmed; a blank note is stored as absent. The
    /// transaction is durably appended before this returns, and a write
    /// failure means it was not recorded.
    pub fn record_transaction(
        &mut self,
        amount: u32,
        direction: Direction,
        account: Account,
        description: impl Into<String>,
    ) -> MarbleResult<Transaction> {
        let description = description.into().trim().to_string();
        let transaction = Transaction::new(amount, direction, account, description);

        self.store.append(transaction.clone())?;
        Ok(transaction)
    }

    /// Net marble balance over the full history
    pub fn balance(&self) -> MarbleResult<i64> {
        Ok(balance(&self.store.read_all()?))
    }

    /// Balance plus the derived front-page figures
    pub fn summary(&self) -> MarbleResult<BalanceSummary> {
        Ok(BalanceSummary::from_transactions(&self.store.read_all()?))
    }

    /// Display-ready ledger entries, oldest first
    pub fn ledger_view(&self) -> MarbleResult<Vec<LedgerEntry>> {
        Ok(build_register(&self.store.read_all()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> LedgerStore {
        LedgerStore::new(dir.path().join("transactions.json"))
    }

    #[test]
    fn test_record_and_balance() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        let mut ledger = LedgerService::new(&mut store);

        ledger
            .record_transaction(10, Direction::Credit, Account::Josie, "chores")
            .unwrap();
        ledger
            .record_transaction(3, Direction::Debit, Account::Audra, "")
            .unwrap();

        assert_eq!(ledger.balance().unwrap(), 7);
    }

    #[test]
    fn test_record_returns_the_transaction() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        let mut ledger = LedgerService::new(&mut store);

        let txn = ledger
            .record_transaction(12, Direction::Credit, Account::Audra, "report card")
            .unwrap();

        assert_eq!(txn.amount, 12);
        assert_eq!(txn.direction, Direction::Credit);
        assert_eq!(txn.account, Account::Audra);
        assert_eq!(txn.description, "report card");
    }

    #[test]
    fn test_description_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        let mut ledger = LedgerService::new(&mut store);

        let txn = ledger
            .record_transaction(5, Direction::Credit, Account::Josie, "  made her bed  ")
            .unwrap();
        assert_eq!(txn.description, "made her bed");

        let blank = ledger
            .record_transaction(5, Direction::Credit, Account::Josie, "   ")
            .unwrap();
        assert!(!blank.has_description());
    }

    #[test]
    fn test_ledger_view_reflects_recorded_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        let mut ledger = LedgerService::new(&mut store);

        ledger
            .record_transaction(10, Direction::Credit, Account::Josie, "first")
            .unwrap();
        ledger
            .record_transaction(4, Direction::Debit, Account::Audra, "second")
            .unwrap();

        let view = ledger.ledger_view().unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].description, "first");
        assert_eq!(view[1].description, "second");
    }

    #[test]
    fn test_summary() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        let mut ledger = LedgerService::new(&mut store);

        ledger
            .record_transaction(200, Direction::Credit, Account::Josie, "")
            .unwrap();
        ledger
            .record_transaction(15, Direction::Debit, Account::Josie, "")
            .unwrap();

        let summary = ledger.summary().unwrap();
        assert_eq!(summary.balance, 185);
        assert_eq!(summary.movies_earned, 2);
    }

    #[test]
    fn test_history_survives_across_services() {
        let temp_dir = TempDir::new().unwrap();

        {
            let mut store = store_in(&temp_dir);
            let mut ledger = LedgerService::new(&mut store);
            ledger
                .record_transaction(30, Direction::Credit, Account::Audra, "dishes")
                .unwrap();
        }

        let mut store = store_in(&temp_dir);
        let ledger = LedgerService::new(&mut store);
        assert_eq!(ledger.balance().unwrap(), 30);
    }
}
