//! Error types for the weekday-calendar crate.

/// Error returned when a (day, month, year) triple fails the validation gate.
///
/// The error deliberately exposes no structured detail: callers can only
/// learn that validation failed. The [`Display`](std::fmt::Display) output
/// names the rule that was violated, for human consumption only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {violation}")]
pub struct ValidationError {
    violation: Violation,
}

impl ValidationError {
    pub(crate) fn new(violation: Violation) -> Self {
        Self { violation }
    }

    #[cfg(test)]
    pub(crate) fn violation(&self) -> &Violation {
        &self.violation
    }
}

/// The individual rule a rejected input broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Violation {
    /// A component does not denote an integer.
    #[error("{field} is not an integer")]
    NotAnInteger {
        /// Name of the offending component (`day`, `month` or `year`).
        field: &'static str,
    },

    /// The month is outside 1..=12.
    #[error("month {month} is outside 1..=12")]
    MonthOutOfRange {
        /// The invalid month that was provided.
        month: i64,
    },

    /// The year is before the 1900 epoch.
    #[error("year {year} is before 1900")]
    YearBeforeEpoch {
        /// The invalid year that was provided.
        year: i64,
    },

    /// The year does not fit the date representation.
    #[error("year {year} is out of the supported range")]
    YearTooLarge {
        /// The invalid year that was provided.
        year: i64,
    },

    /// The day is outside the coarse 1..=31 bound.
    #[error("day {day} is outside 1..=31")]
    DayOutOfRange {
        /// The invalid day that was provided.
        day: i64,
    },

    /// The day exceeds the length of its month in that year.
    #[error("day {day} exceeds the {max_day} days of month {month} in {year}")]
    DayExceedsMonth {
        /// The invalid day that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides the length of February.
        year: i32,
        /// The number of days in that month and year.
        max_day: u8,
    },
}

/// Error returned when a string does not name a weekday.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday name: {input:?}")]
pub struct ParseWeekdayError {
    pub(crate) input: String,
}
