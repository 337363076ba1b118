//! Integration tests for tally-core
//!
//! These tests exercise the full store → report workflow against a real
//! SQLite database, including the previous-month comparisons that the
//! trend and spike passes derive on their own.

use chrono::NaiveDateTime;

use tally_core::{
    analytics::generate_monthly_report,
    db::Database,
    models::{NewTransaction, TransactionType, TrendDirection},
};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Two months of data for one user.
///
/// May 2024: Food 100, Transport 100 (expense 200 total).
/// June 2024: income 2000, Food 145 (spike over May's 100),
/// Transport 100 (flat), and a Saturday Leisure 60.
fn seed_two_months(db: &Database) -> i64 {
    let user_id = db.create_user("Asha", "asha@example.com", "NPR").unwrap();
    let food = db.upsert_category(user_id, "Food").unwrap();
    let transport = db.upsert_category(user_id, "Transport").unwrap();
    let leisure = db.upsert_category(user_id, "Leisure").unwrap();

    let entries = [
        // May baseline
        (
            100.0,
            TransactionType::Expense,
            "2024-05-10 12:00:00",
            Some(food),
        ),
        (
            100.0,
            TransactionType::Expense,
            "2024-05-15 08:00:00",
            Some(transport),
        ),
        // June
        (
            2000.0,
            TransactionType::Income,
            "2024-06-03 09:00:00",
            None,
        ),
        (
            145.0,
            TransactionType::Expense,
            "2024-06-10 12:30:00",
            Some(food),
        ),
        (
            100.0,
            TransactionType::Expense,
            "2024-06-12 08:00:00",
            Some(transport),
        ),
        // 2024-06-08 is a Saturday
        (
            60.0,
            TransactionType::Expense,
            "2024-06-08 19:00:00",
            Some(leisure),
        ),
        // Transfers never shape the report
        (
            500.0,
            TransactionType::Transfer,
            "2024-06-15 10:00:00",
            None,
        ),
    ];
    for (amount, transaction_type, date, category_id) in entries {
        db.insert_transaction(
            user_id,
            &NewTransaction {
                amount,
                transaction_type,
                transaction_date: dt(date),
                category_id,
            },
        )
        .unwrap();
    }

    user_id
}

#[test]
fn test_full_report_workflow() {
    let db = Database::in_memory().expect("Failed to create in-memory database");
    let user_id = seed_two_months(&db);

    let report = generate_monthly_report(&db, user_id, 2024, 6).unwrap();

    // Summary: transfer excluded, full-precision accumulation
    assert_eq!(report.summary.income, 2000.0);
    assert_eq!(report.summary.expense, 305.0);
    assert_eq!(report.summary.savings, 1695.0);
    assert_eq!(report.summary.savings_ratio, 0.85);

    // Categories in first-transaction order
    let names: Vec<&str> = report
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec!["Leisure", "Food", "Transport"]);
    let food = report
        .categories
        .iter()
        .find(|c| c.category == "Food")
        .unwrap();
    assert_eq!(food.amount, 145.0);
    assert_eq!(food.percent, 47.54);

    // Trend: 305 vs May's 200 is a 52.5% increase
    assert_eq!(report.trend.current_month_expense, 305.0);
    assert_eq!(report.trend.previous_month_expense, 200.0);
    assert_eq!(report.trend.change_percent, 52.5);
    assert_eq!(report.trend.trend, TrendDirection::Increase);

    // Patterns: only the Saturday Leisure purchase is weekend spend
    assert_eq!(report.patterns.weekend_expense, 60.0);
    assert_eq!(report.patterns.weekday_expense, 245.0);
    assert!(!report.patterns.weekend_heavy);

    // Spikes: Food grew 45% over May; Transport stayed flat; Leisure is
    // new in June and has no baseline to compare against
    assert_eq!(report.spikes.len(), 1);
    assert_eq!(report.spikes[0].category, "Food");
    assert_eq!(report.spikes[0].change_percent, 45.0);
    assert!(report.spikes[0].spike);
}

#[test]
fn test_report_for_baseline_month_has_flat_trend() {
    let db = Database::in_memory().unwrap();
    let user_id = seed_two_months(&db);

    let report = generate_monthly_report(&db, user_id, 2024, 5).unwrap();

    assert_eq!(report.summary.expense, 200.0);
    assert_eq!(report.trend.previous_month_expense, 0.0);
    assert_eq!(report.trend.change_percent, 0.0);
    assert_eq!(report.trend.trend, TrendDirection::NoChange);
    assert!(report.spikes.is_empty());
}

#[test]
fn test_report_isolated_per_user() {
    let db = Database::in_memory().unwrap();
    let user_id = seed_two_months(&db);

    let other = db.create_user("Bimal", "bimal@example.com", "NPR").unwrap();
    let report = generate_monthly_report(&db, other, 2024, 6).unwrap();

    assert_eq!(report.summary.expense, 0.0);
    assert!(report.categories.is_empty());

    // The seeded user is untouched
    let seeded = generate_monthly_report(&db, user_id, 2024, 6).unwrap();
    assert_eq!(seeded.summary.expense, 305.0);
}
