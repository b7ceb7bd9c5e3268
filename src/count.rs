use chrono::{Datelike, NaiveDate, Weekday};

use crate::{Month, ParseError, days_in_month};

/// Number of days in `month` (1..=12) of `year`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if `month` is not in `1..=12`.
pub fn count_days_in_month(month: u8, year: i32) -> Result<u8, ParseError> {
    Ok(days_in_month(year, Month::new(month)?))
}

/// Number of Saturdays and Sundays in `month` (1..=12) of `year`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if `month` is not in `1..=12`, or
/// `ParseError::InvalidDay` if the year is outside chrono's supported range.
pub fn count_weekends_in_month(month: u8, year: i32) -> Result<u32, ParseError> {
    let month = Month::new(month)?;
    let first = NaiveDate::from_ymd_opt(year, u32::from(month.get()), 1).ok_or(
        ParseError::InvalidDay {
            day: 1,
            month: u32::from(month.get()),
            year,
        },
    )?;

    let weekends = first
        .iter_days()
        .take(usize::from(days_in_month(year, month)))
        .filter(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    Ok(u32::try_from(weekends).unwrap_or(u32::MAX))
}
