//! Transaction storage and the `TransactionStore` queries

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::store::TransactionStore;

/// Storage format for transaction timestamps
const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

impl Database {
    /// Record a transaction, returning the new ID
    pub fn insert_transaction(&self, user_id: i64, tx: &NewTransaction) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (user_id, amount, type, transaction_date, category_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                tx.amount,
                tx.transaction_type.as_str(),
                tx.transaction_date.format(DATETIME_FMT).to_string(),
                tx.category_id,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }
}

fn column_err(
    index: usize,
    err: Box<dyn std::error::Error + Send + Sync + 'static>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, err)
}

impl TransactionStore for Database {
    /// Fetch a user's transactions within `[start, end]`, each with its
    /// category name resolved through a single join
    fn fetch_transactions(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT t.id, t.user_id, t.amount, t.type, t.transaction_date, c.name, t.created_at
            FROM transactions t
            LEFT JOIN categories c ON c.id = t.category_id
            WHERE t.user_id = ?1
              AND date(t.transaction_date) BETWEEN date(?2) AND date(?3)
            ORDER BY t.transaction_date, t.id
            "#,
        )?;

        let transactions = stmt
            .query_map(
                params![user_id, start.to_string(), end.to_string()],
                |row| {
                    let type_str: String = row.get(3)?;
                    let transaction_type = TransactionType::from_str(&type_str)
                        .map_err(|e| column_err(3, e.into()))?;
                    let date_str: String = row.get(4)?;
                    let transaction_date = NaiveDateTime::parse_from_str(&date_str, DATETIME_FMT)
                        .map_err(|e| column_err(4, Box::new(e)))?;

                    Ok(Transaction {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        amount: row.get(2)?,
                        transaction_type,
                        transaction_date,
                        category: row.get(5)?,
                        created_at: parse_datetime(&row.get::<_, String>(6)?),
                    })
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    fn sum_expense(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        let conn = self.conn()?;

        let total: f64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(t.amount), 0)
            FROM transactions t
            WHERE t.user_id = ?1
              AND t.type = 'expense'
              AND date(t.transaction_date) BETWEEN date(?2) AND date(?3)
            "#,
            params![user_id, start.to_string(), end.to_string()],
            |row| row.get(0),
        )?;

        Ok(total)
    }

    /// Grouped expense totals in first-transaction order; unlinked expenses
    /// are excluded by the inner join through categories
    fn sum_expense_by_category(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(String, f64)>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT c.name, SUM(t.amount)
            FROM transactions t
            JOIN categories c ON c.id = t.category_id
            WHERE t.user_id = ?1
              AND t.type = 'expense'
              AND date(t.transaction_date) BETWEEN date(?2) AND date(?3)
            GROUP BY c.name
            ORDER BY MIN(t.id)
            "#,
        )?;

        let totals = stmt
            .query_map(
                params![user_id, start.to_string(), end.to_string()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)),
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(totals)
    }
}
