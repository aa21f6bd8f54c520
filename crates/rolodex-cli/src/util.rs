use crate::error::invalid_input;
use anyhow::Result;
use chrono::NaiveDate;
use rolodex_core::time::parse_date;

pub fn parse_today(raw: &str) -> Result<NaiveDate> {
    parse_date(raw.trim()).map_err(|_| invalid_input("invalid --today: expected DD.MM.YYYY"))
}
