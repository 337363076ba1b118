//! Storage collaborator interface for the analytics engine
//!
//! The analysis passes never talk to SQLite directly - they receive a
//! `TransactionStore` and perform three kinds of scoped fetches. This keeps
//! the passes pure over the snapshot they are handed and lets tests swap in
//! the in-memory store from `test_utils`.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::Transaction;

/// Scoped read access to a user's transactions
///
/// All bounds are inclusive calendar dates. Implementations must return
/// each transaction with its category reference already resolved to a
/// display name - the engine never performs per-row lookups.
pub trait TransactionStore: Send + Sync {
    /// Fetch every transaction for `user_id` dated within `[start, end]`
    fn fetch_transactions(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>>;

    /// Aggregate expense total for the window, without fetching rows
    fn sum_expense(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> Result<f64>;

    /// Expense totals grouped by category name, in the grouped query's
    /// category order (first transaction seen per category)
    ///
    /// Uncategorized expenses are excluded: the grouping joins through the
    /// categories table, so only linked categories appear here.
    fn sum_expense_by_category(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(String, f64)>>;
}
