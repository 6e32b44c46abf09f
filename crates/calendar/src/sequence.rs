//! Date sequence generation.

use crate::date::CalendarDate;

/// Generates a contiguous sequence of calendar dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries,
/// including leap days, are handled by [`CalendarDate::next_day`]. The
/// sequence is shorter than `n_days` only if it runs past the last
/// representable year.
///
/// # Example
///
/// ```
/// use weekday_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::new(28, 2, 2000).unwrap();
/// let dates = date_sequence(start, 3);
/// let shown: Vec<String> = dates.iter().map(ToString::to_string).collect();
/// assert_eq!(shown, ["2000-02-28", "2000-02-29", "2000-03-01"]);
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    std::iter::successors(Some(start), |date| date.next_day())
        .take(n_days)
        .collect()
}
