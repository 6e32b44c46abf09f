//! Gregorian leap-year rule.

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year when it is divisible by 4, except that century
/// years must also be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
