//! Validated Gregorian date on or after the 1900-01-01 epoch.

use std::fmt;

use crate::doy::{EPOCH_YEAR, days_before_year, days_into_year, month_length};
use crate::error::{ValidationError, Violation};
use crate::input::DatePart;
use crate::weekday::Weekday;

/// A proleptic Gregorian date no earlier than 1900-01-01.
///
/// The only way to obtain one from outside the crate is
/// [`CalendarDate::new`], so every value has passed the validation gate.
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

fn integer(value: impl DatePart, field: &'static str) -> Result<i64, ValidationError> {
    value
        .as_integer()
        .ok_or_else(|| ValidationError::new(Violation::NotAnInteger { field }))
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from day, month and year.
    ///
    /// Checks run structural rules before semantic ones: each component
    /// must denote an integer, then the month must be in 1..=12, the year at
    /// least 1900, the day in 1..=31, and finally the day must not exceed
    /// the length of that month in that year.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any of the rules above fails.
    pub fn new(
        day: impl DatePart,
        month: impl DatePart,
        year: impl DatePart,
    ) -> Result<Self, ValidationError> {
        let day = integer(day, "day")?;
        let month = integer(month, "month")?;
        let year = integer(year, "year")?;

        if !(1..=12).contains(&month) {
            return Err(ValidationError::new(Violation::MonthOutOfRange { month }));
        }
        if year < i64::from(EPOCH_YEAR) {
            return Err(ValidationError::new(Violation::YearBeforeEpoch { year }));
        }
        // `next_day` needs room for one more year.
        let year = i32::try_from(year)
            .ok()
            .filter(|&y| y < i32::MAX)
            .ok_or_else(|| ValidationError::new(Violation::YearTooLarge { year }))?;
        if !(1..=31).contains(&day) {
            return Err(ValidationError::new(Violation::DayOutOfRange { day }));
        }

        // Both narrowed by the range checks above.
        let (day, month) = (day as u8, month as u8);
        let max_day = month_length(month, year);
        if day > max_day {
            return Err(ValidationError::new(Violation::DayExceedsMonth {
                day,
                month,
                year,
                max_day,
            }));
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (>= 1900).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Number of whole days between 1900-01-01 and this date.
    pub fn days_since_epoch(self) -> u64 {
        days_before_year(self.year) + u64::from(days_into_year(self.day, self.month, self.year))
    }

    /// Returns the day of the week this date falls on.
    pub fn weekday(self) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch())
    }

    /// Returns the following calendar day.
    ///
    /// Rolls over month ends (including February 28/29) and December 31.
    /// Returns `None` only past the last representable year.
    pub fn next_day(self) -> Option<Self> {
        if self.day < month_length(self.month, self.year) {
            Some(Self {
                day: self.day + 1,
                ..self
            })
        } else if self.month < 12 {
            Some(Self {
                month: self.month + 1,
                day: 1,
                ..self
            })
        } else {
            let year = self.year.checked_add(1).filter(|&y| y < i32::MAX)?;
            Some(Self {
                year,
                month: 1,
                day: 1,
            })
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
