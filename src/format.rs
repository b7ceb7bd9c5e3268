use chrono::{Datelike, Timelike};

use crate::{Calendar, CalendarDate, HALF_DAY_HOURS};

impl Calendar {
    /// Formats `date` as `M/D/YYYY, h:mm:ss AM|PM`.
    ///
    /// Month and year come from the local view, day and time of day from UTC.
    /// Midnight keeps hour `0` (`0:05:00 AM`) and noon is `12:00:00 PM`.
    pub fn format_date(&self, date: &CalendarDate) -> String {
        let local = self.local(date);
        let utc = date.utc();

        let (hour, meridiem) = match utc.hour() {
            hour if hour < HALF_DAY_HOURS => (hour, "AM"),
            HALF_DAY_HOURS => (HALF_DAY_HOURS, "PM"),
            hour => (hour - HALF_DAY_HOURS, "PM"),
        };

        format!(
            "{}/{}/{}, {}:{:02}:{:02} {}",
            local.month(),
            utc.day(),
            local.year(),
            hour,
            utc.minute(),
            utc.second(),
            meridiem
        )
    }
}
