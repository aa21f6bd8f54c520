use crate::error::CoreError;
use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

// DD.MM.YYYY
const DATE_WIDTH: usize = 10;
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `DD.MM.YYYY` date.
///
/// The shape is checked before handing off to chrono, which would otherwise
/// accept unpadded fields such as `1.2.2000`.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    if !has_date_shape(input) {
        return Err(CoreError::date_format());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| CoreError::date_format())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_date_shape(input: &str) -> bool {
    if input.len() != DATE_WIDTH {
        return false;
    }
    input.bytes().enumerate().all(|(index, byte)| {
        if SEPARATOR_POSITIONS.contains(&index) {
            byte == b'.'
        } else {
            byte.is_ascii_digit()
        }
    })
}
