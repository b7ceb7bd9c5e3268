use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use tracing::{debug, trace, warn};

use crate::types::next_month;
use crate::{
    Calendar, CalendarDate, DAYS_TO_NEXT_FRIDAY, DateError, FRIDAY_13TH_SEARCH_MONTHS, Month,
    UNLUCKY_DAY,
};

impl Calendar {
    /// The next Friday strictly after `date`.
    ///
    /// The gap is picked from the UTC weekday and then added as whole local
    /// calendar days, so the local wall-clock time is kept.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is not representable.
    pub fn next_friday(&self, date: &CalendarDate) -> Result<CalendarDate, DateError> {
        let weekday = date.utc().weekday().num_days_from_sunday() as usize;
        let gap = DAYS_TO_NEXT_FRIDAY[weekday];
        let naive = self
            .local(date)
            .naive_local()
            .checked_add_days(Days::new(u64::from(gap)))
            .ok_or(DateError::OutOfRange)?;
        self.resolve(naive)
    }

    /// The first Friday the 13th on or after the 13th of the local month of `date`,
    /// at local midnight.
    ///
    /// # Errors
    /// Returns `DateError::SearchExhausted` if no Friday the 13th falls within
    /// `FRIDAY_13TH_SEARCH_MONTHS` months, which the Gregorian calendar never allows.
    pub fn next_friday_the_13th(&self, date: &CalendarDate) -> Result<CalendarDate, DateError> {
        let year = self.local(date).year();
        let found = friday_13th_from(year, self.local_month(date))?;
        self.resolve(found.and_time(NaiveTime::MIN))
    }
}

/// First Friday the 13th at or after the 13th of `(year, month)`.
fn friday_13th_from(year: i32, month: Month) -> Result<NaiveDate, DateError> {
    let (mut candidate_year, mut candidate_month) = (year, month);
    for _ in 0..FRIDAY_13TH_SEARCH_MONTHS {
        let candidate =
            NaiveDate::from_ymd_opt(candidate_year, u32::from(candidate_month.get()), UNLUCKY_DAY)
                .ok_or(DateError::OutOfRange)?;
        trace!(%candidate, weekday = %candidate.weekday(), "checking 13th");
        if candidate.weekday() == Weekday::Fri {
            debug!(%candidate, "found Friday the 13th");
            return Ok(candidate);
        }
        (candidate_year, candidate_month) = next_month(candidate_year, candidate_month);
    }

    warn!(year, month = month.get(), "Friday the 13th search exhausted");
    Err(DateError::SearchExhausted {
        year,
        month: month.get(),
        months: FRIDAY_13TH_SEARCH_MONTHS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_name;
    use crate::test_utils::{instant, local, zoned};

    #[test]
    fn test_next_friday_cases() {
        let cal = Calendar::utc();
        let cases = [
            ("2024-02-03T00:00:00Z", "2024-02-09T00:00:00Z"),
            ("2024-02-13T00:00:00Z", "2024-02-16T00:00:00Z"),
            ("2024-02-16T00:00:00Z", "2024-02-23T00:00:00Z"),
            ("2024-02-29T10:30:00Z", "2024-03-01T10:30:00Z"),
            ("2023-12-31T00:00:00Z", "2024-01-05T00:00:00Z"),
        ];
        for (input, expected) in cases {
            let next = cal.next_friday(&instant(input)).unwrap();
            assert_eq!(next, instant(expected), "input {input}");
        }
    }

    #[test]
    fn test_next_friday_is_always_a_later_friday() {
        let cal = Calendar::utc();
        let start = instant("2024-01-01T12:00:00Z");
        for offset in 0..60 {
            let date = CalendarDate::from_timestamp_millis(
                start.timestamp_millis() + offset * crate::MS_PER_DAY,
            )
            .unwrap();
            let next = cal.next_friday(&date).unwrap();

            assert_eq!(day_name(&next), "Friday");
            let gap = (next.utc() - date.utc()).num_days();
            assert!((1..=7).contains(&gap), "gap {gap} from {date}");
        }
    }

    #[test]
    fn test_next_friday_keeps_local_wall_clock_across_dst() {
        // Thursday before the spring-forward weekend in Berlin
        let berlin = zoned("Europe/Berlin");
        let date = berlin.at(2024, 3, 28, 9, 0, 0).unwrap();
        let next = berlin.next_friday(&date).unwrap();
        assert_eq!(next, berlin.at(2024, 3, 29, 9, 0, 0).unwrap());

        // Saturday: six local days later is after the clocks moved
        let date = berlin.at(2024, 3, 30, 9, 0, 0).unwrap();
        let next = berlin.next_friday(&date).unwrap();
        assert_eq!(next, instant("2024-04-05T07:00:00Z"));
    }

    #[test]
    fn test_next_friday_the_13th_cases() {
        let cal = Calendar::utc();
        let cases = [
            ((2024, 1, 13), (2024, 9, 13)),
            ((2023, 2, 1), (2023, 10, 13)),
            ((2024, 9, 13), (2024, 9, 13)),
            ((2024, 10, 1), (2024, 12, 13)),
            ((2024, 12, 14), (2024, 12, 13)),
            ((2025, 1, 1), (2025, 6, 13)),
        ];
        for ((y, m, d), (ey, em, ed)) in cases {
            let found = cal.next_friday_the_13th(&local(&cal, y, m, d)).unwrap();
            assert_eq!(found, local(&cal, ey, em, ed), "from {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_next_friday_the_13th_rolls_december_into_january() {
        let cal = Calendar::utc();
        // no Friday the 13th in December 2025; the next is in February 2026
        let found = cal.next_friday_the_13th(&local(&cal, 2025, 12, 1)).unwrap();
        assert_eq!(found, local(&cal, 2026, 2, 13));
    }

    #[test]
    fn test_next_friday_the_13th_uses_local_month_and_midnight() {
        let ny = zoned("America/New_York");
        // 2024-10-01T02:00Z is still September 30 in New York
        let found = ny.next_friday_the_13th(&instant("2024-10-01T02:00:00Z")).unwrap();
        assert_eq!(found, instant("2024-09-13T04:00:00Z"));
    }

    #[test]
    fn test_search_window_always_suffices() {
        for year in 1900..=2100 {
            for m in 1..=12 {
                let month = Month::new(m).unwrap();
                assert!(
                    friday_13th_from(year, month).is_ok(),
                    "no Friday the 13th within {FRIDAY_13TH_SEARCH_MONTHS} months of {year}-{m:02}"
                );
            }
        }
    }
}
