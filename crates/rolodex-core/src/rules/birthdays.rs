use crate::error::CoreError;
use crate::rules::dates::anniversary_in_year;
use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;

/// How far ahead to look for birthdays and whether weekend dates move to Monday.
///
/// Only built through `new` or `Default`, so the window is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingPolicy {
    window_days: i64,
    roll_weekends: bool,
}

impl Default for GreetingPolicy {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            roll_weekends: true,
        }
    }
}

impl GreetingPolicy {
    pub fn new(window_days: i64, roll_weekends: bool) -> Result<Self, CoreError> {
        Ok(Self {
            window_days: validate_window_days(window_days)?,
            roll_weekends,
        })
    }

    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    pub fn roll_weekends(&self) -> bool {
        self.roll_weekends
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// The date on which `birthday` should be acknowledged, if its next occurrence
/// falls inside `[today, today + window_days]`.
///
/// The occurrence is taken in `today`'s year, or in the following year when it
/// has already passed. With `roll_weekends`, a Saturday or Sunday occurrence is
/// reported on the following Monday, which may lie past the window end.
pub fn greeting_date(
    birthday: NaiveDate,
    today: NaiveDate,
    policy: GreetingPolicy,
) -> Option<NaiveDate> {
    let window = u64::try_from(policy.window_days).ok()?;
    let window_end = today.checked_add_days(Days::new(window))?;

    let this_year = anniversary_in_year(birthday, today.year())?;
    let candidate = if this_year >= today {
        this_year
    } else {
        anniversary_in_year(birthday, today.year() + 1)?
    };

    if candidate > window_end {
        return None;
    }

    if policy.roll_weekends {
        Some(roll_off_weekend(candidate))
    } else {
        Some(candidate)
    }
}

/// Moves Saturday and Sunday forward to the next Monday.
pub fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = u64::from(date.weekday().num_days_from_monday());
    if weekday < 5 {
        return date;
    }
    date.checked_add_days(Days::new(7 - weekday)).unwrap_or(date)
}
