//! Date-string parsing.
//!
//! Accepts the forms a JavaScript `Date` constructor commonly sees:
//! RFC 3339 and ISO date-times with an offset, RFC 2822,
//! `DD Mon YYYY HH:MM:SS UTC`, bare ISO dates (UTC midnight) and zone-less
//! date-times (local time).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::calendar::{Calendar, resolve_local};
use crate::ParseError;

/// ISO calendar date, read as UTC midnight
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Zone-less date-time forms, read as local time
const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
];

/// Zone-less date forms, read as local midnight
const LOCAL_DATE_FORMATS: &[&str] = &["%d %b %Y", "%b %d %Y", "%B %d, %Y"];

/// ISO date-times with an offset but no seconds
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Suffixes naming UTC on otherwise zone-less input, matched ignoring case
const UTC_SUFFIXES: &[&str] = &["UTC", "GMT", "Z"];

pub(crate) fn parse_instant(text: &str, zone: &Tz) -> Result<DateTime<Utc>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Some(parsed) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Some(rest) = strip_utc_suffix(trimmed) {
        return parse_naive(rest.trim_end())
            .map(|naive| naive.and_utc())
            .ok_or_else(|| ParseError::InvalidFormat(text.to_owned()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    parse_naive(trimmed)
        .and_then(|naive| resolve_local(zone, naive))
        .ok_or_else(|| ParseError::InvalidFormat(text.to_owned()))
}

fn strip_utc_suffix(text: &str) -> Option<&str> {
    UTC_SUFFIXES.iter().find_map(|suffix| {
        let split = text.len().checked_sub(suffix.len())?;
        let (rest, tail) = text.split_at_checked(split)?;
        tail.eq_ignore_ascii_case(suffix).then_some(rest)
    })
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            LOCAL_DATE_FORMATS
                .iter()
                .chain(std::iter::once(&ISO_DATE_FORMAT))
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

impl Calendar {
    /// Milliseconds since the Unix epoch for a date string.
    ///
    /// ```
    /// use datecalc::Calendar;
    ///
    /// let cal = Calendar::utc();
    /// assert_eq!(cal.date_to_timestamp("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
    /// assert_eq!(cal.date_to_timestamp("04 Dec 1995 00:12:00 UTC").unwrap(), 818_035_920_000);
    /// ```
    ///
    /// # Errors
    /// Returns `ParseError` if the text is not a recognizable date.
    pub fn date_to_timestamp(&self, text: &str) -> Result<i64, ParseError> {
        self.parse(text).map(crate::CalendarDate::timestamp_millis)
    }
}
