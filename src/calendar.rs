use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CalendarDate, DateError, Month, ParseError, ZONE_ENV_VAR, parse};

/// The zone "local" calendar fields are read in.
///
/// Operations that mix UTC and local reads are methods on `Calendar`, so the
/// zone they use is always explicit. The default is UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(default = "utc_zone")]
    zone: Tz,
}

const fn utc_zone() -> Tz {
    Tz::UTC
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl Calendar {
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Calendar whose local zone is UTC
    pub const fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    /// Looks up an IANA zone name such as `Europe/Berlin`.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownZone` if the name is not in the zone database.
    pub fn from_zone_name(name: &str) -> Result<Self, ParseError> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ParseError::UnknownZone(name.to_owned()))
    }

    /// Reads the local zone from the `TZ` environment variable, using UTC when it is unset.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownZone` if `TZ` names an unknown zone.
    pub fn from_env() -> Result<Self, ParseError> {
        Self::from_zone_var(std::env::var(ZONE_ENV_VAR).ok().as_deref())
    }

    /// Calendar for a `TZ`-style value. A missing or blank value means UTC;
    /// a leading `:` is ignored.
    fn from_zone_var(value: Option<&str>) -> Result<Self, ParseError> {
        match value.map(str::trim) {
            Some(name) if !name.is_empty() => Self::from_zone_name(name.trim_start_matches(':')),
            _ => {
                debug!(var = ZONE_ENV_VAR, "local zone not set, using UTC");
                Ok(Self::utc())
            },
        }
    }

    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Local view of an instant
    pub fn local(&self, date: &CalendarDate) -> DateTime<Tz> {
        date.in_zone(&self.zone)
    }

    /// Parses a date string, reading zone-less forms as local time.
    ///
    /// # Errors
    /// Returns `ParseError` if the text matches none of the accepted forms.
    pub fn parse(&self, text: &str) -> Result<CalendarDate, ParseError> {
        parse::parse_instant(text, &self.zone).map(CalendarDate::from)
    }

    /// Builds an instant from local calendar fields.
    ///
    /// Wall-clock times skipped by a DST transition land one hour later;
    /// repeated times resolve to the earlier instant.
    ///
    /// # Errors
    /// Returns `DateError::Parse` for an invalid month, day or time of day.
    pub fn at(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<CalendarDate, DateError> {
        Month::try_from(month)?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ParseError::InvalidDay { day, month, year })?;
        let naive = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
            ParseError::InvalidFormat(format!("{hour:02}:{minute:02}:{second:02}"))
        })?;
        self.resolve(naive)
    }

    pub(crate) fn resolve(&self, naive: NaiveDateTime) -> Result<CalendarDate, DateError> {
        resolve_local(&self.zone, naive)
            .map(CalendarDate::from)
            .ok_or(DateError::OutOfRange)
    }
}

/// Maps local wall-clock time to UTC the way a JavaScript `Date` does.
pub(crate) fn resolve_local(zone: &Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            // inside a DST gap
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            zone.from_local_datetime(&shifted).earliest()
        })
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{instant, zoned};

    #[test]
    fn test_default_is_utc() {
        assert_eq!(Calendar::default(), Calendar::utc());
        assert_eq!(Calendar::utc().zone(), Tz::UTC);
    }

    #[test]
    fn test_from_zone_name() {
        let cal = Calendar::from_zone_name("Europe/Berlin").unwrap();
        assert_eq!(cal.zone(), chrono_tz::Europe::Berlin);

        let result = Calendar::from_zone_name("Mars/Olympus_Mons");
        assert!(matches!(result, Err(ParseError::UnknownZone(name)) if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_from_zone_var() {
        assert_eq!(Calendar::from_zone_var(None), Ok(Calendar::utc()));
        assert_eq!(Calendar::from_zone_var(Some("   ")), Ok(Calendar::utc()));
        assert_eq!(
            Calendar::from_zone_var(Some(":Europe/Berlin")),
            Ok(Calendar::new(chrono_tz::Europe::Berlin))
        );
        assert_eq!(
            Calendar::from_zone_var(Some("America/New_York")),
            Ok(Calendar::new(chrono_tz::America::New_York))
        );
        assert!(matches!(
            Calendar::from_zone_var(Some("Nowhere/Special")),
            Err(ParseError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_serde() {
        let cal: Calendar = serde_json::from_str(r#"{"zone":"America/New_York"}"#).unwrap();
        assert_eq!(cal.zone(), chrono_tz::America::New_York);

        let cal: Calendar = serde_json::from_str("{}").unwrap();
        assert_eq!(cal, Calendar::utc());

        let json = serde_json::to_string(&Calendar::utc()).unwrap();
        assert_eq!(json, r#"{"zone":"UTC"}"#);

        assert!(serde_json::from_str::<Calendar>(r#"{"zone":"Nowhere/Special"}"#).is_err());
    }

    #[test]
    fn test_at_local_fields() {
        let cal = zoned("Europe/Berlin");
        let date = cal.at(2024, 1, 10, 13, 0, 0).unwrap();
        assert_eq!(date, instant("2024-01-10T12:00:00Z"));

        let date = Calendar::utc().at(2023, 6, 1, 8, 20, 55).unwrap();
        assert_eq!(date, instant("2023-06-01T08:20:55Z"));
    }

    #[test]
    fn test_at_rejects_invalid_fields() {
        let cal = Calendar::utc();
        assert!(matches!(
            cal.at(2024, 13, 1, 0, 0, 0),
            Err(DateError::Parse(ParseError::InvalidMonth(13)))
        ));
        assert!(matches!(
            cal.at(2024, 300, 1, 0, 0, 0),
            Err(DateError::Parse(ParseError::InvalidMonth(300)))
        ));
        assert!(matches!(
            cal.at(2023, 2, 29, 0, 0, 0),
            Err(DateError::Parse(ParseError::InvalidDay { day: 29, month: 2, year: 2023 }))
        ));
        assert!(matches!(
            cal.at(2023, 2, 28, 24, 0, 0),
            Err(DateError::Parse(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_at_dst_transitions() {
        let cal = zoned("Europe/Berlin");

        // 02:30 does not exist on 2024-03-31
        let gap = cal.at(2024, 3, 31, 2, 30, 0).unwrap();
        assert_eq!(gap, instant("2024-03-31T01:30:00Z"));

        // 02:30 happens twice on 2024-10-27
        let repeated = cal.at(2024, 10, 27, 2, 30, 0).unwrap();
        assert_eq!(repeated, instant("2024-10-27T00:30:00Z"));
    }

    #[test]
    fn test_local_view() {
        let cal = zoned("America/New_York");
        let local = cal.local(&instant("2024-03-01T02:00:00Z"));
        assert_eq!(local.to_rfc3339(), "2024-02-29T21:00:00-05:00");
    }
}
