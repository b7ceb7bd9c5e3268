use chrono::{Datelike, NaiveDate};

use crate::{Calendar, CalendarDate, DAYS_PER_WEEK};

/// Week of the year for a calendar date.
///
/// Week 1 is the week containing January 1 and weeks start on Monday, so
/// week 1 may be shorter than seven days.
pub fn week_of_year(day: NaiveDate) -> u32 {
    let days_since_new_year = day.ordinal0();
    // weekday of January 1, 0 = Sunday
    let new_year_weekday = (day.weekday().num_days_from_sunday() + DAYS_PER_WEEK
        - days_since_new_year % DAYS_PER_WEEK)
        % DAYS_PER_WEEK;

    let days_to_anchor = match new_year_weekday {
        1 => 0,
        0 => 1,
        weekday => DAYS_PER_WEEK - weekday,
    };
    if days_since_new_year < days_to_anchor {
        return 1;
    }

    let elapsed = days_since_new_year - days_to_anchor;
    match new_year_weekday {
        // January 1 is a Monday: the anchor opens week 1
        1 => (elapsed + 1).div_ceil(DAYS_PER_WEEK),
        // January 1 is a Sunday: the anchor Monday opens week 2
        0 => (elapsed + 1).div_ceil(DAYS_PER_WEEK) + 1,
        // otherwise the anchor is the Sunday closing week 1
        _ => elapsed.div_ceil(DAYS_PER_WEEK) + 1,
    }
}

impl Calendar {
    /// Week of the year of the local calendar date of `date`. See [`week_of_year`].
    pub fn week_number(&self, date: &CalendarDate) -> u32 {
        week_of_year(self.local(date).date_naive())
    }
}
