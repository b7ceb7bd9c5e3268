/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Months per quarter
pub const MONTHS_PER_QUARTER: u8 = 3;

/// Days per week
pub const DAYS_PER_WEEK: u32 = 7;

/// Milliseconds in a 24-hour day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Weekday names indexed by days from Sunday (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Days until the next Friday, indexed by days from Sunday.
/// A Friday maps to a full week so the result is never the same day.
pub const DAYS_TO_NEXT_FRIDAY: [u32; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Day of month searched for by the Friday-the-13th lookup
pub const UNLUCKY_DAY: u32 = 13;

/// Candidate months inspected before the Friday-the-13th search gives up.
/// Consecutive Friday-the-13ths are never more than 14 months apart.
pub const FRIDAY_13TH_SEARCH_MONTHS: u32 = 14;

/// Hours on a 12-hour clock face
pub const HALF_DAY_HOURS: u32 = 12;

/// Date component separator (ISO 8601 and DD-MM-YYYY)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Environment variable naming the local zone
pub const ZONE_ENV_VAR: &str = "TZ";
