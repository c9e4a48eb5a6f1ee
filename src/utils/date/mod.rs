// Date utility functions
// Month arithmetic shared by the grid generator and selection controller

use chrono::{Datelike, NaiveDate};

/// First day of the given month (`month0` is 0-based), `None` if out of range.
pub fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Number of days in a month, computed as "day 0 of the next month".
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = shift_month(year, month0, 1);
    first_of_month(next_year, next_month0)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday of the first of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Shift a (year, month0) pair by `delta` months, rolling the year over.
pub fn shift_month(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total_months = year * 12 + month0 as i32 + delta;
    (total_months.div_euclid(12), total_months.rem_euclid(12) as u32)
}

pub fn is_same_month(date: NaiveDate, year: i32, month0: u32) -> bool {
    date.year() == year && date.month0() == month0
}
