//! Domain models for Tally

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Registration and authentication happen outside this crate; the storage
/// layer only keeps enough profile data to label reports and prime the
/// insight generator (currency, user type).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// ISO 4217 code, e.g. "NPR", "USD". Amounts are never converted.
    pub currency_code: String,
    pub created_at: DateTime<Utc>,
}

/// A spending category, unique by name within a user's namespace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

/// The recognized transaction kinds
///
/// Only `Income` and `Expense` participate in totals; every pass matches
/// exhaustively so other kinds are ignored rather than misclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "transfer" => Ok(Self::Transfer),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dated, categorized, typed money movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    /// Non-negative; the kind is carried by `transaction_type`, not the sign
    pub amount: f64,
    pub transaction_type: TransactionType,
    /// Full timestamp so the weekday can always be computed
    pub transaction_date: NaiveDateTime,
    /// Resolved category display name, pre-loaded by the storage layer.
    /// `None` means the transaction was never linked to a category.
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A new transaction to be recorded (before DB insertion)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub transaction_date: NaiveDateTime,
    /// Category ID, if the transaction is linked to one
    pub category_id: Option<i64>,
}

// ========== Report Models ==========

/// Income/expense totals for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    /// savings / income, or 0 when there is no income
    pub savings_ratio: f64,
}

/// One category's share of the period's expense total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of total expense, or 0 when the period has no expenses
    pub percent: f64,
}

/// Month-over-month expense direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increase,
    Decrease,
    NoChange,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::NoChange => "no_change",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Month-over-month expense comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub current_month_expense: f64,
    pub previous_month_expense: f64,
    pub change_percent: f64,
    pub trend: TrendDirection,
}

/// Weekend vs. weekday expense split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPatterns {
    pub weekend_expense: f64,
    pub weekday_expense: f64,
    /// Raw-total comparison; not normalized for the 5:2 day-count imbalance
    pub weekend_heavy: bool,
}

/// A category whose month-over-month expense growth crossed the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpike {
    pub category: String,
    pub change_percent: f64,
    pub spike: bool,
}

/// The full monthly analytics report
///
/// Constructed fresh per request and handed to the caller; never persisted.
/// Only `summary` and `categories` feed the insight generator - `trend`,
/// `patterns`, and `spikes` are computed for the report consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub summary: Summary,
    /// First-seen category order, not sorted by amount
    pub categories: Vec<CategoryShare>,
    pub trend: Trend,
    pub patterns: SpendingPatterns,
    pub spikes: Vec<CategorySpike>,
}
