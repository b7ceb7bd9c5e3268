//! Direct reads of calendar fields.

use chrono::{Datelike, Timelike};

use crate::{Calendar, CalendarDate, Month, WEEKDAY_NAMES, is_leap_year};

/// English name of the UTC weekday of `date`.
pub fn day_name(date: &CalendarDate) -> &'static str {
    let index = date.utc().weekday().num_days_from_sunday() as usize;
    WEEKDAY_NAMES.get(index).copied().unwrap_or_default()
}

impl Calendar {
    /// Local time of day as `hh:mm:ss`.
    pub fn time_of_day(&self, date: &CalendarDate) -> String {
        let local = self.local(date);
        format!("{:02}:{:02}:{:02}", local.hour(), local.minute(), local.second())
    }

    /// Quarter (1..=4) of the local month.
    pub fn quarter(&self, date: &CalendarDate) -> u8 {
        self.local_month(date).quarter()
    }

    /// Whether the local year of `date` is a leap year.
    pub fn is_leap_year(&self, date: &CalendarDate) -> bool {
        is_leap_year(self.local(date).year())
    }

    pub(crate) fn local_month(&self, date: &CalendarDate) -> Month {
        // chrono months are always 1..=12
        Month::try_from(self.local(date).month()).unwrap_or(Month::JANUARY)
    }
}
