//! Calendar-month period arithmetic
//!
//! A `Period` is an inclusive `[start, end]` date range covering exactly one
//! calendar month. The end date is always derived from `(year, month)` as
//! "first day of the next month minus one day" - it is never stored.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An inclusive calendar-month date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Resolve the inclusive day boundaries of `(year, month)`
    ///
    /// December rolls into January of the next year. Fails with
    /// `InvalidPeriod` when `month` is outside 1-12.
    pub fn resolve(year: i32, month: u32) -> Result<Period> {
        let start =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidPeriod(month))?;

        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        // Safe: next_month is 1-12 by construction
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(Error::InvalidPeriod(month))?
            - Duration::days(1);

        Ok(Period { start, end })
    }

    /// Render the period as a "YYYY-MM" label
    pub fn label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}

/// The `(year, month)` pair one calendar month before `(year, month)`
///
/// January rolls back into December of the previous year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mid_year() {
        let period = Period::resolve(2024, 6).unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_resolve_december_rolls_year() {
        let period = Period::resolve(2023, 12).unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_resolve_leap_february() {
        let period = Period::resolve(2024, 2).unwrap();
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let period = Period::resolve(2023, 2).unwrap();
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_end_is_last_day_of_same_month() {
        use chrono::Datelike;
        for month in 1..=12 {
            let period = Period::resolve(2025, month).unwrap();
            assert_eq!(period.start.month(), period.end.month());
            assert_eq!(period.start.day(), 1);
            // The day after `end` is the first of a different month
            assert_eq!((period.end + Duration::days(1)).day(), 1);
        }
    }

    #[test]
    fn test_resolve_rejects_invalid_month() {
        assert!(matches!(
            Period::resolve(2024, 0),
            Err(Error::InvalidPeriod(0))
        ));
        assert!(matches!(
            Period::resolve(2024, 13),
            Err(Error::InvalidPeriod(13))
        ));
    }

    #[test]
    fn test_label() {
        let period = Period::resolve(2024, 3).unwrap();
        assert_eq!(period.label(), "2024-03");
    }

    #[test]
    fn test_previous_month() {
        assert_eq!(previous_month(2024, 6), (2024, 5));
        assert_eq!(previous_month(2024, 1), (2023, 12));
    }
}
