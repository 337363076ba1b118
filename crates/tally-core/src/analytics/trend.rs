//! Month-over-month expense trend

use crate::error::Result;
use crate::models::{Trend, TrendDirection};
use crate::period::{previous_month, Period};
use crate::store::TransactionStore;

use super::{round2, storage_err};

/// Change below this magnitude (in percent) never registers as a trend
///
/// The band is a deliberate noise filter: a 4% swing month to month is
/// ordinary variation, not a behavioral signal.
pub const TREND_BAND_PERCENT: f64 = 5.0;

/// Compare the current month's expense total to the prior month's
///
/// Takes the already-computed current total so the snapshot is not walked
/// again, and asks storage for the previous month's aggregate rather than
/// refetching full rows. A previous total of zero (or less) means there is
/// no baseline: change is 0 and the direction is `NoChange` regardless of
/// current spend.
pub fn month_trend(
    store: &dyn TransactionStore,
    user_id: i64,
    year: i32,
    month: u32,
    current_expense: f64,
) -> Result<Trend> {
    let (prev_year, prev_month) = previous_month(year, month);
    let period = Period::resolve(prev_year, prev_month)?;

    let previous_expense = store
        .sum_expense(user_id, period.start, period.end)
        .map_err(storage_err)?;

    let mut change_percent = 0.0;
    let mut trend = TrendDirection::NoChange;

    if previous_expense > 0.0 {
        change_percent = (current_expense - previous_expense) / previous_expense * 100.0;
        if change_percent > TREND_BAND_PERCENT {
            trend = TrendDirection::Increase;
        } else if change_percent < -TREND_BAND_PERCENT {
            trend = TrendDirection::Decrease;
        }
    }

    Ok(Trend {
        current_month_expense: round2(current_expense),
        previous_month_expense: round2(previous_expense),
        change_percent: round2(change_percent),
        trend,
    })
}
