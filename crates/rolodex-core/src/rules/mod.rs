pub mod birthdays;
pub mod dates;

pub use birthdays::{
    greeting_date, roll_off_weekend, validate_window_days, GreetingPolicy, DEFAULT_WINDOW_DAYS,
    MAX_WINDOW_DAYS,
};
pub use dates::{anniversary_in_year, is_leap_year};
