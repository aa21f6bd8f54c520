use chrono::{Datelike, NaiveDate};

/// The same month and day in `year`. A 29 February date lands on 28 February
/// when `year` is not a leap year.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    if let Some(value) = date.with_year(year) {
        return Some(value);
    }

    if date.month() == 2 && date.day() == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }

    None
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
