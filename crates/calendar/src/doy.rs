//! Month-length tables and elapsed-day counting from the 1900-01-01 epoch.

use crate::error::{ValidationError, Violation};
use crate::leap::{days_in_year, is_leap_year};

/// First year of the supported range; January 1 of this year is day 0.
pub const EPOCH_YEAR: i32 = 1900;

/// Number of days in each month of a common year (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Length of `month` in `year`, with no range check on `month`.
///
/// Callers guarantee `month` is in 1..=12.
pub(crate) fn month_length(month: u8, year: i32) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[usize::from(month)]
    }
}

/// Returns the number of days in `month` of `year`.
///
/// February has 29 days in leap years and 28 otherwise.
///
/// # Errors
///
/// Returns [`ValidationError`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new(Violation::MonthOutOfRange {
            month: i64::from(month),
        }));
    }
    Ok(month_length(month, year))
}

/// Number of days from the epoch (1900-01-01) to January 1 of `year`.
///
/// Every year from 1900 up to, but excluding, `year` contributes 365 or 366
/// days. The target year itself never contributes here, so its own leap day
/// is only counted by [`days_into_year`]. Years at or before the epoch yield 0.
///
/// Cost grows linearly with `year - 1900`: one iteration per elapsed year.
pub fn days_before_year(year: i32) -> u64 {
    (EPOCH_YEAR..year).map(|y| u64::from(days_in_year(y))).sum()
}

/// Zero-based ordinal of `day`/`month` within `year`.
///
/// Sums the lengths of all months before `month` (February counted as 29
/// days in leap years) and adds `day - 1`, so January 1 is 0 and
/// December 31 is 364 or 365. The input is not validated; construct a
/// [`CalendarDate`](crate::CalendarDate) first when it comes from outside.
pub fn days_into_year(day: u8, month: u8, year: i32) -> u16 {
    let before_month: u16 = (1..month.min(13))
        .map(|m| u16::from(month_length(m, year)))
        .sum();
    before_month + u16::from(day.saturating_sub(1))
}
