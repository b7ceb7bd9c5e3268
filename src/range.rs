use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Calendar, CalendarDate, MS_PER_DAY, ParseError, RANGE_SEPARATOR, prelude::*};

/// A pair of instants, both ends inclusive.
/// Ordering of the ends is not enforced; see [`DatePeriod::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DatePeriod {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date period operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

impl DatePeriod {
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Returns the start of the period
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end of the period
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both ends as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Checks if `start <= date <= end`.
    /// Compares instants, so time of day matters; a reversed period contains nothing.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Whole days covered, counting both ends: the absolute distance in days,
    /// rounded to the nearest day, plus one. Symmetric in the two ends.
    pub fn day_count(&self) -> i64 {
        let distance = (self.end.timestamp_millis() - self.start.timestamp_millis()).abs();
        (distance + MS_PER_DAY / 2) / MS_PER_DAY + 1
    }
}

impl Calendar {
    /// Parses both ends of a period, reading zone-less forms as local time.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if either end is not a recognizable date.
    pub fn period(&self, start: &str, end: &str) -> Result<DatePeriod, RangeError> {
        Ok(DatePeriod::new(self.parse(start)?, self.parse(end)?))
    }
}

impl FromStr for DatePeriod {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No period separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                let start = start_str.trim().parse::<CalendarDate>()?;
                let end = end_str.trim().parse::<CalendarDate>()?;

                Ok(Self::new(start, end))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DatePeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DatePeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
