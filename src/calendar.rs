use crate::consts::{
    APRIL, CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JUNE,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, NOVEMBER, SEPTEMBER, SHORT_MONTH_DAYS,
};

pub const fn is_leap_year(year: u64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// April, June, September and November
pub const fn is_short_month(month: u32) -> bool {
    matches!(month, APRIL | JUNE | SEPTEMBER | NOVEMBER)
}

/// Length of `month` in `year`.
///
/// Anything that is neither February nor a short month counts as a 31-day
/// month, including month numbers outside `1..=12`.
pub const fn days_in_month(year: u64, month: u32) -> u32 {
    if month == FEBRUARY {
        if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS
        }
    } else if is_short_month(month) {
        SHORT_MONTH_DAYS
    } else {
        MAX_DAY
    }
}

/// Upper-bound check applied whenever a date is assigned in bulk.
///
/// Only upper bounds are checked: month 0 and day 0 pass.
pub const fn is_valid(year: u64, month: u32, day: u32) -> bool {
    month <= MAX_MONTH && day <= days_in_month(year, month)
}
