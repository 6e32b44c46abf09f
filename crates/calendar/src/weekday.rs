//! Weekday enumeration and the `weekday_of` entry point.

use std::fmt;
use std::str::FromStr;

use crate::date::CalendarDate;
use crate::error::{ParseWeekdayError, ValidationError};
use crate::input::DatePart;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, starting from Monday (the weekday of the epoch).
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Maps a count of days elapsed since 1900-01-01 to its weekday.
    pub fn from_days_since_epoch(days: u64) -> Self {
        Self::ALL[(days % 7) as usize]
    }

    /// English name of the weekday, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// ISO 8601 day number: Monday is 1, Sunday is 7.
    pub fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// The following weekday; Sunday wraps to Monday.
    pub fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % 7]
    }

    /// The preceding weekday; Monday wraps to Sunday.
    pub fn pred(self) -> Self {
        Self::ALL[(self as usize + 6) % 7]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Parses a full English weekday name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseWeekdayError {
                input: s.to_string(),
            })
    }
}

/// Computes the weekday of the given Gregorian date.
///
/// Each component may be any [`DatePart`]: integers, integral floats, or
/// numeric strings. The date must be on or after 1900-01-01 and must exist
/// in the calendar.
///
/// Days are counted one year at a time from 1900, so the cost grows
/// linearly with the year.
///
/// # Errors
///
/// Returns [`ValidationError`] if the input does not denote a valid date.
/// No arithmetic is performed on invalid input.
///
/// # Examples
///
/// ```
/// use weekday_calendar::{Weekday, weekday_of};
///
/// assert_eq!(weekday_of(1, 1, 1900).unwrap(), Weekday::Monday);
/// assert_eq!(weekday_of("29", "2", "2000").unwrap().name(), "Tuesday");
/// assert!(weekday_of(29, 2, 1900).is_err());
/// ```
pub fn weekday_of(
    day: impl DatePart,
    month: impl DatePart,
    year: impl DatePart,
) -> Result<Weekday, ValidationError> {
    CalendarDate::new(day, month, year).map(CalendarDate::weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_monday() {
        assert_eq!(Weekday::from_days_since_epoch(0), Weekday::Monday);
        assert_eq!(Weekday::from_days_since_epoch(7), Weekday::Monday);
        assert_eq!(Weekday::from_days_since_epoch(6), Weekday::Sunday);
    }

    #[test]
    fn names() {
        let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn display_matches_name_and_pads() {
        assert_eq!(Weekday::Friday.to_string(), "Friday");
        assert_eq!(format!("{:>8}", Weekday::Monday), "  Monday");
    }

    #[test]
    fn numbers_from_monday() {
        assert_eq!(Weekday::Monday.number_from_monday(), 1);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
    }

    #[test]
    fn succ_and_pred_cycle() {
        assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
        assert_eq!(Weekday::Monday.pred(), Weekday::Sunday);
        for day in Weekday::ALL {
            assert_eq!(day.succ().pred(), day);
        }
        let mut day = Weekday::Wednesday;
        for _ in 0..7 {
            day = day.succ();
        }
        assert_eq!(day, Weekday::Wednesday);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!(" sunday ".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert_eq!("THURSDAY".parse::<Weekday>().unwrap(), Weekday::Thursday);
    }

    #[test]
    fn parse_rejects_abbreviations() {
        let err = "Mon".parse::<Weekday>().unwrap_err();
        assert_eq!(err.to_string(), "unknown weekday name: \"Mon\"");
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn weekday_of_spot_checks() {
        assert_eq!(weekday_of(1, 1, 1900).unwrap(), Weekday::Monday);
        assert_eq!(weekday_of(1, 1, 2000).unwrap(), Weekday::Saturday);
        assert_eq!(weekday_of(29, 2, 2000).unwrap(), Weekday::Tuesday);
    }

    #[test]
    fn weekday_of_rejects_invalid() {
        assert!(weekday_of(29, 2, 1900).is_err());
        assert!(weekday_of(15, 13, 2020).is_err());
        assert!(weekday_of(1, 1, 1899).is_err());
    }
}
