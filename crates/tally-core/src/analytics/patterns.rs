//! Weekend vs. weekday spending split

use chrono::Datelike;

use crate::models::{SpendingPatterns, Transaction, TransactionType};

use super::round2;

/// Split expense totals by calendar position of each transaction
///
/// Saturday and Sunday (Monday-start indices 5 and 6) count as weekend.
/// The comparison is of raw totals - a month has more weekdays than weekend
/// days, and that imbalance is intentionally not normalized away.
pub fn detect_patterns(transactions: &[Transaction]) -> SpendingPatterns {
    let mut weekend_expense = 0.0;
    let mut weekday_expense = 0.0;

    for tx in transactions {
        if tx.transaction_type != TransactionType::Expense {
            continue;
        }

        if tx.transaction_date.weekday().num_days_from_monday() >= 5 {
            weekend_expense += tx.amount;
        } else {
            weekday_expense += tx.amount;
        }
    }

    SpendingPatterns {
        weekend_heavy: weekend_expense > weekday_expense,
        weekend_expense: round2(weekend_expense),
        weekday_expense: round2(weekday_expense),
    }
}
