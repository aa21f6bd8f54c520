use crate::directory::Directory;
use chrono::NaiveDate;
use rolodex_core::rules::{greeting_date, GreetingPolicy};
use rolodex_core::{UpcomingBirthday, UpcomingBirthdays};

impl Directory {
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        self.upcoming_birthdays_with(today, GreetingPolicy::default())
    }

    /// Greeting dates for every record whose birthday falls in the policy window,
    /// in directory order.
    pub fn upcoming_birthdays_with(
        &self,
        today: NaiveDate,
        policy: GreetingPolicy,
    ) -> UpcomingBirthdays {
        let entries = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let greeting_date = greeting_date(birthday.date(), today, policy)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    greeting_date,
                })
            })
            .collect();
        UpcomingBirthdays::from_entries(entries)
    }
}
