//! Per-category month-over-month spike detection

use std::collections::HashMap;

use crate::error::Result;
use crate::models::CategorySpike;
use crate::period::{previous_month, Period};
use crate::store::TransactionStore;

use super::{round2, storage_err};

/// Growth above this percentage flags a category as a spike
pub const SPIKE_THRESHOLD_PERCENT: f64 = 40.0;

/// Flag categories whose expense grew more than 40% over the prior month
///
/// Resolves both periods itself - this pass shares nothing with the trend
/// pass. Categories with no positive previous total are skipped: a
/// brand-new category has no baseline, so it cannot spike. Categories that
/// vanished this month are never reported either; only growth is tracked.
/// Output follows the current grouped query's category order.
pub fn detect_spikes(
    store: &dyn TransactionStore,
    user_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<CategorySpike>> {
    let current_period = Period::resolve(year, month)?;
    let (prev_year, prev_month) = previous_month(year, month);
    let previous_period = Period::resolve(prev_year, prev_month)?;

    let current = store
        .sum_expense_by_category(user_id, current_period.start, current_period.end)
        .map_err(storage_err)?;
    let previous = store
        .sum_expense_by_category(user_id, previous_period.start, previous_period.end)
        .map_err(storage_err)?;

    let prev_map: HashMap<&str, f64> = previous
        .iter()
        .map(|(name, amount)| (name.as_str(), *amount))
        .collect();

    let mut spikes = Vec::new();
    for (category, amount) in &current {
        let prev_amount = prev_map.get(category.as_str()).copied().unwrap_or(0.0);
        if prev_amount <= 0.0 {
            continue;
        }

        let change = (amount - prev_amount) / prev_amount * 100.0;
        if change > SPIKE_THRESHOLD_PERCENT {
            spikes.push(CategorySpike {
                category: category.clone(),
                change_percent: round2(change),
                spike: true,
            });
        }
    }

    Ok(spikes)
}
