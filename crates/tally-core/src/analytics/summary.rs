//! Income/expense summary for one period

use crate::models::{Summary, Transaction, TransactionType};

use super::round2;

/// Total income and expense for the snapshot and derive savings
///
/// Transfers (and any future kind) are ignored, not an error. The ratio is
/// 0 when there is no income - dividing by a non-positive baseline is
/// undefined, so it short-circuits to the safe default.
pub fn calculate_summary(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expense = 0.0;

    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => income += tx.amount,
            TransactionType::Expense => expense += tx.amount,
            TransactionType::Transfer => {}
        }
    }

    let savings = income - expense;
    let savings_ratio = if income > 0.0 { savings / income } else { 0.0 };

    Summary {
        income: round2(income),
        expense: round2(expense),
        savings: round2(savings),
        savings_ratio: round2(savings_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryStore;

    #[test]
    fn test_empty_snapshot() {
        let summary = calculate_summary(&[]);
        assert_eq!(
            summary,
            Summary {
                income: 0.0,
                expense: 0.0,
                savings: 0.0,
                savings_ratio: 0.0,
            }
        );
    }

    #[test]
    fn test_mixed_transactions() {
        let mut store = MemoryStore::new();
        store.add(1, 1500.0, TransactionType::Income, "2024-06-01 09:00", None);
        store.add(
            1,
            400.0,
            TransactionType::Expense,
            "2024-06-05 12:00",
            Some("Food"),
        );
        store.add(
            1,
            100.0,
            TransactionType::Expense,
            "2024-06-09 12:00",
            None,
        );
        // Transfers never enter the totals
        store.add(
            1,
            9999.0,
            TransactionType::Transfer,
            "2024-06-10 12:00",
            None,
        );

        let summary = calculate_summary(store.transactions());
        assert_eq!(summary.income, 1500.0);
        assert_eq!(summary.expense, 500.0);
        assert_eq!(summary.savings, 1000.0);
        assert_eq!(summary.savings_ratio, 0.67);
    }

    #[test]
    fn test_savings_is_income_minus_expense_exactly() {
        let mut store = MemoryStore::new();
        store.add(1, 0.1, TransactionType::Income, "2024-06-01 09:00", None);
        store.add(1, 0.2, TransactionType::Income, "2024-06-02 09:00", None);
        store.add(
            1,
            0.1,
            TransactionType::Expense,
            "2024-06-03 09:00",
            None,
        );

        // Rounded from the full-precision accumulators, not from rounded parts
        let summary = calculate_summary(store.transactions());
        assert_eq!(summary.income, 0.3);
        assert_eq!(summary.savings, 0.2);
    }

    #[test]
    fn test_zero_income_ratio_defaults_to_zero() {
        let mut store = MemoryStore::new();
        store.add(
            1,
            250.0,
            TransactionType::Expense,
            "2024-06-01 09:00",
            None,
        );

        let summary = calculate_summary(store.transactions());
        assert_eq!(summary.savings, -250.0);
        assert_eq!(summary.savings_ratio, 0.0);
    }
}
