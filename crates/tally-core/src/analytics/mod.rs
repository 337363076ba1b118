//! Monthly analytics aggregation
//!
//! Five independent passes over one month's transaction snapshot, assembled
//! into an `AnalyticsReport` by `generate_monthly_report`:
//!
//! - `summary` - income/expense totals, savings, savings ratio
//! - `breakdown` - per-category expense shares in first-seen order
//! - `trend` - month-over-month expense direction with a ±5% noise band
//! - `patterns` - weekend vs. weekday expense split
//! - `spikes` - per-category month-over-month growth above 40%
//!
//! The passes have no data dependency on one another: each re-derives what
//! it needs from the snapshot or performs its own scoped fetch. The trend
//! and spike passes deliberately resolve the previous period independently
//! rather than sharing a cached value.

mod breakdown;
mod patterns;
mod spikes;
mod summary;
mod trend;

pub use breakdown::{category_breakdown, UNCATEGORIZED};
pub use patterns::detect_patterns;
pub use spikes::{detect_spikes, SPIKE_THRESHOLD_PERCENT};
pub use summary::calculate_summary;
pub use trend::{month_trend, TREND_BAND_PERCENT};

use crate::error::{Error, Result};
use crate::models::AnalyticsReport;
use crate::period::Period;
use crate::store::TransactionStore;

/// Build the full monthly report for one user
///
/// Resolves the period, fetches the transaction snapshot (each row carrying
/// its resolved category), and runs all five passes. A failed fetch surfaces
/// as `StorageUnavailable` - it is never downgraded to an empty report, so
/// callers can tell "storage is down" apart from "no data this month".
pub fn generate_monthly_report(
    store: &dyn TransactionStore,
    user_id: i64,
    year: i32,
    month: u32,
) -> Result<AnalyticsReport> {
    let period = Period::resolve(year, month)?;

    let transactions = store
        .fetch_transactions(user_id, period.start, period.end)
        .map_err(storage_err)?;

    tracing::debug!(
        user_id,
        period = %period.label(),
        count = transactions.len(),
        "Fetched transaction snapshot"
    );

    let summary = calculate_summary(&transactions);
    let categories = category_breakdown(&transactions);
    let trend = month_trend(store, user_id, year, month, summary.expense)?;
    let patterns = detect_patterns(&transactions);
    let spikes = detect_spikes(store, user_id, year, month)?;

    Ok(AnalyticsReport {
        summary,
        categories,
        trend,
        patterns,
        spikes,
    })
}

/// Classify a fetch-boundary failure as `StorageUnavailable`
pub(crate) fn storage_err(e: Error) -> Error {
    match e {
        Error::StorageUnavailable(_) => e,
        other => Error::StorageUnavailable(other.to_string()),
    }
}

/// Round a monetary aggregate to 2 decimal places
///
/// Applied only when an output value object is constructed; accumulators
/// keep full precision so rounding error cannot compound across categories.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionType, TrendDirection};
    use crate::test_utils::MemoryStore;

    #[test]
    fn test_round2() {
        assert_eq!(round2(47.540983), 47.54);
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(-3.456), -3.46);
    }

    #[test]
    fn test_report_invalid_month() {
        let store = MemoryStore::new();
        assert!(matches!(
            generate_monthly_report(&store, 1, 2024, 13),
            Err(Error::InvalidPeriod(13))
        ));
    }

    #[test]
    fn test_report_empty_month_is_not_an_error() {
        let store = MemoryStore::new();
        let report = generate_monthly_report(&store, 1, 2024, 6).unwrap();

        assert_eq!(report.summary.income, 0.0);
        assert_eq!(report.summary.expense, 0.0);
        assert!(report.categories.is_empty());
        assert_eq!(report.trend.trend, TrendDirection::NoChange);
        assert!(!report.patterns.weekend_heavy);
        assert!(report.spikes.is_empty());
    }

    // Scenario: 1000 income on 2024-06-01, 200 Food expense on Sunday
    // 2024-06-02, 100 Food expense on Monday 2024-06-03.
    #[test]
    fn test_report_end_to_end_scenario() {
        let mut store = MemoryStore::new();
        store.add(1, 1000.0, TransactionType::Income, "2024-06-01 09:00", None);
        store.add(
            1,
            200.0,
            TransactionType::Expense,
            "2024-06-02 13:00",
            Some("Food"),
        );
        store.add(
            1,
            100.0,
            TransactionType::Expense,
            "2024-06-03 19:30",
            Some("Food"),
        );

        let report = generate_monthly_report(&store, 1, 2024, 6).unwrap();

        assert_eq!(report.summary.income, 1000.0);
        assert_eq!(report.summary.expense, 300.0);
        assert_eq!(report.summary.savings, 700.0);
        assert_eq!(report.summary.savings_ratio, 0.7);

        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "Food");
        assert_eq!(report.categories[0].amount, 300.0);
        assert_eq!(report.categories[0].percent, 100.0);

        assert_eq!(report.patterns.weekend_expense, 200.0);
        assert_eq!(report.patterns.weekday_expense, 100.0);
        assert!(report.patterns.weekend_heavy);

        // No May data: trend has no baseline and nothing can spike
        assert_eq!(report.trend.trend, TrendDirection::NoChange);
        assert!(report.spikes.is_empty());
    }
}
