//! User profile operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::User;

impl Database {
    /// Create a user, returning the new ID
    ///
    /// Fails with `InvalidData` if the email is already registered.
    pub fn create_user(&self, name: &str, email: &str, currency_code: &str) -> Result<i64> {
        let conn = self.conn()?;

        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE email = ?",
                params![email],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(Error::InvalidData(format!(
                "Email already registered: {}",
                email
            )));
        }

        conn.execute(
            "INSERT INTO users (name, email, currency_code) VALUES (?, ?, ?)",
            params![name, email, currency_code],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a user by ID
    pub fn get_user(&self, user_id: i64) -> Result<User> {
        let conn = self.conn()?;

        conn.query_row(
            "SELECT id, name, email, currency_code, created_at FROM users WHERE id = ?",
            params![user_id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    currency_code: row.get(3)?,
                    created_at: parse_datetime(&row.get::<_, String>(4)?),
                })
            },
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("User {}", user_id)))
    }
}
