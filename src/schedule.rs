//! Shift schedules from a repeating work/off pattern.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DATE_SEPARATOR, Month, ParseError};

/// Output format of schedule dates; input also accepts unpadded day and month
const SCHEDULE_DATE_FORMAT: &str = "%d-%m-%Y";

/// A repeating cycle of `work_days` working days followed by `off_days` days off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct WorkPattern {
    work_days: u32,
    off_days:  u32,
}

/// Error type for schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A pattern needs at least one working day.
    #[error("Invalid work pattern: {work_days} work days (must be at least 1)")]
    InvalidPattern { work_days: u32 },

    /// Start date is after end date.
    #[error("Invalid schedule period: start ({start}) is after end ({end})")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    /// Error parsing a schedule date.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl WorkPattern {
    /// Creates a pattern; `off_days` may be zero.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidPattern` if `work_days` is zero.
    pub const fn new(work_days: u32, off_days: u32) -> Result<Self, ScheduleError> {
        if work_days == 0 {
            return Err(ScheduleError::InvalidPattern { work_days });
        }
        Ok(Self { work_days, off_days })
    }

    pub const fn work_days(&self) -> u32 {
        self.work_days
    }

    pub const fn off_days(&self) -> u32 {
        self.off_days
    }

    /// Length of one full work/off cycle
    pub const fn cycle_len(&self) -> u32 {
        self.work_days.saturating_add(self.off_days)
    }
}

impl TryFrom<(u32, u32)> for WorkPattern {
    type Error = ScheduleError;

    fn try_from((work_days, off_days): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(work_days, off_days)
    }
}

impl From<WorkPattern> for (u32, u32) {
    fn from(pattern: WorkPattern) -> Self {
        (pattern.work_days, pattern.off_days)
    }
}

/// Parses a `DD-MM-YYYY` schedule date. Day and month may omit the leading zero.
///
/// # Errors
/// Returns `ParseError` if the text is not three numeric components or does
/// not name a real calendar day.
pub fn parse_schedule_date(text: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected DD{DATE_SEPARATOR}MM{DATE_SEPARATOR}YYYY, found {trimmed}"
        )));
    };

    let day: u32 = parse_component(day)?;
    let month = Month::try_from(parse_component::<u32>(month)?)?;
    let year: i32 = parse_component(year)?;

    let month = u32::from(month.get());
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDay { day, month, year })
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Formats a date as `DD-MM-YYYY`.
pub fn format_schedule_date(day: NaiveDate) -> String {
    day.format(SCHEDULE_DATE_FORMAT).to_string()
}

/// Working days between `start` and `end`, both inclusive.
///
/// Day `i` of the period (counting from 0 at `start`) is a working day when
/// `i % cycle_len < work_days`. `end` is included exactly when it lands on a
/// working position.
///
/// # Errors
/// Returns `ScheduleError::InvalidPeriod` if `start` is after `end`.
pub fn work_days(
    start: NaiveDate,
    end: NaiveDate,
    pattern: WorkPattern,
) -> Result<Vec<NaiveDate>, ScheduleError> {
    if start > end {
        return Err(ScheduleError::InvalidPeriod { start, end });
    }

    let positions = (0..pattern.cycle_len()).cycle();
    Ok(start
        .iter_days()
        .take_while(|day| *day <= end)
        .zip(positions)
        .filter(|(_, position)| *position < pattern.work_days)
        .map(|(day, _)| day)
        .collect())
}

/// Working days between two `DD-MM-YYYY` dates, formatted the same way.
///
/// ```
/// use datecalc::{WorkPattern, work_schedule};
///
/// let pattern = WorkPattern::new(1, 1).unwrap();
/// let days = work_schedule("01-01-2024", "10-01-2024", pattern).unwrap();
/// assert_eq!(days, ["01-01-2024", "03-01-2024", "05-01-2024", "07-01-2024", "09-01-2024"]);
/// ```
///
/// # Errors
/// Returns `ScheduleError` if either date is malformed or `start` is after `end`.
#[tracing::instrument(level = "debug")]
pub fn work_schedule(
    start: &str,
    end: &str,
    pattern: WorkPattern,
) -> Result<Vec<String>, ScheduleError> {
    let start = parse_schedule_date(start)?;
    let end = parse_schedule_date(end)?;

    let days = work_days(start, end, pattern)?;
    debug!(count = days.len(), "generated work schedule");
    Ok(days.into_iter().map(format_schedule_date).collect())
}
