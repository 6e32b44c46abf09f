//! # weekday-calendar
//!
//! Pure Gregorian date arithmetic: the day of the week for any date on or
//! after 1900-01-01, computed by counting days from that epoch (a Monday).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(day, month, year)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     A -->|"invalid"| E["ValidationError"]
//!     B -->|".days_since_epoch()"| C["days_before_year + days_into_year"]
//!     C -->|"mod 7"| D["Weekday"]
//!     B -->|".next_day()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use weekday_calendar::{CalendarDate, Weekday, is_leap_year, weekday_of};
//!
//! // Single entry point
//! assert_eq!(weekday_of(1, 1, 2000).unwrap(), Weekday::Saturday);
//! assert_eq!(weekday_of("29", "2", "2000").unwrap().to_string(), "Tuesday");
//!
//! // Invalid dates never reach the arithmetic
//! assert!(weekday_of(29, 2, 1900).is_err());
//! assert!(!is_leap_year(1900));
//!
//! // Validated dates and elapsed days
//! let date = CalendarDate::new(1, 1, 1901).unwrap();
//! assert_eq!(date.days_since_epoch(), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Gregorian leap-year rule |
//! | `doy` | Month lengths and elapsed-day counting |
//! | `input` | Numeric-like input components |
//! | `date` | Validated date and the validation gate |
//! | `weekday` | Weekday enum and `weekday_of` |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod input;
mod leap;
mod sequence;
mod weekday;

pub use date::CalendarDate;
pub use doy::{EPOCH_YEAR, days_before_year, days_in_month, days_into_year};
pub use error::{ParseWeekdayError, ValidationError};
pub use input::DatePart;
pub use leap::{days_in_year, is_leap_year};
pub use sequence::date_sequence;
pub use weekday::{Weekday, weekday_of};
