//! Per-category expense breakdown

use crate::models::{CategoryShare, Transaction, TransactionType};

use super::round2;

/// Display name for expenses with no linked category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Aggregate expense totals per category with their share of total expense
///
/// Categories appear in the order they are first encountered while walking
/// the snapshot - that order is part of the contract, so the accumulator is
/// insertion-ordered rather than a hash map. The missing-category fallback
/// happens right here at the read site, never downstream.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut total_expense = 0.0;

    for tx in transactions {
        if tx.transaction_type != TransactionType::Expense {
            continue;
        }
        total_expense += tx.amount;

        let name = tx.category.as_deref().unwrap_or(UNCATEGORIZED);
        match totals.iter_mut().find(|(n, _)| n.as_str() == name) {
            Some((_, amount)) => *amount += tx.amount,
            None => totals.push((name.to_string(), tx.amount)),
        }
    }

    totals
        .into_iter()
        .map(|(category, amount)| {
            let percent = if total_expense > 0.0 {
                amount / total_expense * 100.0
            } else {
                0.0
            };
            CategoryShare {
                category,
                amount: round2(amount),
                percent: round2(percent),
            }
        })
        .collect()
}
