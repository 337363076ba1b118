//! Tally Core Library
//!
//! Shared functionality for the Tally spending analytics service:
//! - Database access and migrations
//! - Monthly analytics passes (summary, breakdown, trend, patterns, spikes)
//! - Calendar-month period resolution
//! - Pluggable local AI backends for plain-language advice

pub mod ai;
pub mod analytics;
pub mod db;
pub mod error;
pub mod models;
pub mod period;
pub mod store;

/// Test utilities including the in-memory transaction store
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ai::{
    AIClient, AdviceInsights, InsightBackend, InsightRequest, MockBackend, OllamaBackend,
    UserProfile,
};
pub use analytics::generate_monthly_report;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    AnalyticsReport, CategoryShare, CategorySpike, NewTransaction, SpendingPatterns, Summary,
    Transaction, TransactionType, Trend, TrendDirection, User,
};
pub use period::Period;
pub use store::TransactionStore;
