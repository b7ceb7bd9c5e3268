use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MONTHS_PER_QUARTER,
};
use crate::prelude::*;
use crate::{DateError, ParseError};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// January, the first month of the year
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(u32::from(value)))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(u32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Quarter of the year this month belongs to (1..=4)
    pub const fn quarter(self) -> u8 {
        (self.get() - 1) / MONTHS_PER_QUARTER + 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Month {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let narrow = u8::try_from(value).map_err(|_| ParseError::InvalidMonth(value))?;
        Self::new(narrow)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single instant on the timeline.
///
/// Holds no zone of its own: callers read fields through [`CalendarDate::utc`]
/// or through a zone view ([`CalendarDate::in_zone`], [`crate::Calendar::local`]),
/// so every UTC/local decision is visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", "_0.to_rfc3339_opts(SecondsFormat::Millis, true)")]
pub struct CalendarDate(DateTime<Utc>);

impl CalendarDate {
    /// Creates an instant from milliseconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is outside chrono's supported range.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or(DateError::OutOfRange)
    }

    /// Milliseconds since the Unix epoch
    #[inline]
    pub fn timestamp_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// UTC view of this instant
    #[inline]
    pub const fn utc(self) -> DateTime<Utc> {
        self.0
    }

    /// View of this instant in an arbitrary zone
    pub fn in_zone<Z: TimeZone>(self, zone: &Z) -> DateTime<Z> {
        self.0.with_timezone(zone)
    }
}

/// Parses with UTC standing in for the local zone.
/// Use [`crate::Calendar::parse`] to interpret zone-less input elsewhere.
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_instant(s, &Tz::UTC).map(Self)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    let m = month.get();
    if m == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[m as usize]
    }
}

/// The month after `month`, rolling December into January of the next year.
pub(crate) const fn next_month(year: i32, month: Month) -> (i32, Month) {
    if month.get() == DECEMBER {
        return (year + 1, Month::JANUARY);
    }
    match month.0.checked_add(1) {
        Some(next) => (year, Month(next)),
        None => (year + 1, Month::JANUARY),
    }
}
