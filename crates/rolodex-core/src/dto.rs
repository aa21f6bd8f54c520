use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub greeting_date: NaiveDate,
}

/// Outcome of an upcoming-birthdays query. `Results` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum UpcomingBirthdays {
    Empty,
    Results(Vec<UpcomingBirthday>),
}

impl UpcomingBirthdays {
    pub fn from_entries(entries: Vec<UpcomingBirthday>) -> Self {
        if entries.is_empty() {
            UpcomingBirthdays::Empty
        } else {
            UpcomingBirthdays::Results(entries)
        }
    }

    pub fn entries(&self) -> &[UpcomingBirthday] {
        match self {
            UpcomingBirthdays::Empty => &[],
            UpcomingBirthdays::Results(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, UpcomingBirthdays::Empty)
    }
}
