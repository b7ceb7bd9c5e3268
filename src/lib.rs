//! Pure calendar helpers.
//!
//! Every operation is a stateless function of its arguments. Instants are
//! [`CalendarDate`] values; anything that reads "local" calendar fields goes
//! through a [`Calendar`], which names the zone those fields are read in.
//!
//! ```
//! use datecalc::{Calendar, WorkPattern, work_schedule};
//!
//! let cal = Calendar::utc();
//! let date = cal.parse("2024-02-01T15:00:00.000Z").unwrap();
//! assert_eq!(cal.format_date(&date), "2/1/2024, 3:00:00 PM");
//!
//! let pattern = WorkPattern::new(1, 3).unwrap();
//! let days = work_schedule("01-01-2024", "15-01-2024", pattern).unwrap();
//! assert_eq!(days, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
//! ```

mod calendar;
mod consts;
mod count;
mod fields;
mod format;
mod parse;
mod prelude;
mod range;
mod schedule;
mod search;
mod types;
mod week;

pub use calendar::Calendar;
pub use consts::*;
pub use count::{count_days_in_month, count_weekends_in_month};
pub use fields::day_name;
pub use range::{DatePeriod, RangeError};
pub use schedule::{
    ScheduleError, WorkPattern, format_schedule_date, parse_schedule_date, work_days,
    work_schedule,
};
pub use types::{CalendarDate, Month, days_in_month, is_leap_year};
pub use week::week_of_year;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u32, month: u32, year: i32 },
    #[display(fmt = "Unknown time zone: {_0}")]
    UnknownZone(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Error parsing an input value.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The result falls outside the representable date range.
    #[error("Date arithmetic left the supported range")]
    OutOfRange,

    /// No Friday the 13th within the search window.
    #[error("No Friday the 13th within {months} months of {year}-{month:02}")]
    SearchExhausted { year: i32, month: u8, months: u32 },
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidFormat("nope".to_owned()).to_string(),
            "Invalid date format: nope"
        );
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                day:   30,
                month: 2,
                year:  2024,
            }
            .to_string(),
            "Invalid day 30 for month 2024-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::SearchExhausted {
            year:   2024,
            month:  3,
            months: 14,
        };
        assert_eq!(err.to_string(), "No Friday the 13th within 14 months of 2024-03");

        let err: DateError = ParseError::EmptyInput.into();
        assert_eq!(err.to_string(), "Empty date string");
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ParseError>();
        assert_impl::<DateError>();
        assert_impl::<RangeError>();
        assert_impl::<ScheduleError>();
    }
}
