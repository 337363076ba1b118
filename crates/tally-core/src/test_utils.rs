//! Test utilities
//!
//! `MemoryStore` implements `TransactionStore` over a plain `Vec` so the
//! analysis passes can be exercised without SQLite. Enabled for this
//! crate's own tests and, via the `test-utils` feature, for downstream
//! crates' tests.

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::error::Result;
use crate::models::{Transaction, TransactionType};
use crate::store::TransactionStore;

/// In-memory transaction store
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transaction; `date` is "YYYY-MM-DD HH:MM"
    pub fn add(
        &mut self,
        user_id: i64,
        amount: f64,
        transaction_type: TransactionType,
        date: &str,
        category: Option<&str>,
    ) {
        let transaction_date = NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M")
            .expect("valid test datetime");
        let id = self.transactions.len() as i64 + 1;
        self.transactions.push(Transaction {
            id,
            user_id,
            amount,
            transaction_type,
            transaction_date,
            category: category.map(str::to_string),
            created_at: Utc::now(),
        });
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn in_window<'a>(
        &'a self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.transactions.iter().filter(move |tx| {
            let day = tx.transaction_date.date();
            tx.user_id == user_id && day >= start && day <= end
        })
    }
}

impl TransactionStore for MemoryStore {
    fn fetch_transactions(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        Ok(self.in_window(user_id, start, end).cloned().collect())
    }

    fn sum_expense(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        Ok(self
            .in_window(user_id, start, end)
            .filter(|tx| tx.transaction_type == TransactionType::Expense)
            .map(|tx| tx.amount)
            .sum())
    }

    fn sum_expense_by_category(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(String, f64)>> {
        let mut totals: Vec<(String, f64)> = Vec::new();

        for tx in self
            .in_window(user_id, start, end)
            .filter(|tx| tx.transaction_type == TransactionType::Expense)
        {
            // Unlinked expenses are excluded from the grouped view, matching
            // the SQL join through the categories table
            let Some(name) = tx.category.as_deref() else {
                continue;
            };
            match totals.iter_mut().find(|(n, _)| n.as_str() == name) {
                Some((_, amount)) => *amount += tx.amount,
                None => totals.push((name.to_string(), tx.amount)),
            }
        }

        Ok(totals)
    }
}
