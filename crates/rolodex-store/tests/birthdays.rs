use chrono::NaiveDate;
use rolodex_core::rules::GreetingPolicy;
use rolodex_core::{ContactRecord, UpcomingBirthday, UpcomingBirthdays};
use rolodex_store::Directory;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn contact(name: &str, birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(name).expect("name");
    record.add_phone("1234567890").expect("phone");
    if let Some(value) = birthday {
        record.set_birthday(value).expect("birthday");
    }
    record
}

fn entry(name: &str, greeting_date: NaiveDate) -> UpcomingBirthday {
    UpcomingBirthday {
        name: name.to_string(),
        greeting_date,
    }
}

#[test]
fn upcoming_birthdays_empty_directory() {
    let directory = Directory::new();
    let result = directory.upcoming_birthdays(date(2024, 6, 12));
    assert_eq!(result, UpcomingBirthdays::Empty);
    assert!(result.entries().is_empty());
}

#[test]
fn upcoming_birthdays_without_matches_is_empty_variant() {
    let mut directory = Directory::new();
    directory.add(contact("NoBirthday", None));
    directory.add(contact("Later", Some("20.06.1990")));
    directory.add(contact("Earlier", Some("11.06.1990")));

    let result = directory.upcoming_birthdays(date(2024, 6, 12));
    assert!(result.is_empty());
}

#[test]
fn upcoming_birthdays_follow_directory_order() {
    let mut directory = Directory::new();
    directory.add(contact("Zed", Some("14.06.1980")));
    directory.add(contact("Saturday", Some("15.06.1995")));
    directory.add(contact("Skipped", Some("01.09.1995")));
    directory.add(contact("Today", Some("12.06.2001")));

    let result = directory.upcoming_birthdays(date(2024, 6, 12));
    assert_eq!(
        result,
        UpcomingBirthdays::Results(vec![
            entry("Zed", date(2024, 6, 14)),
            entry("Saturday", date(2024, 6, 17)),
            entry("Today", date(2024, 6, 12)),
        ])
    );
}

#[test]
fn upcoming_birthdays_cross_the_new_year() {
    let mut directory = Directory::new();
    directory.add(contact("Alice", Some("01.01.1990")));

    let result = directory.upcoming_birthdays(date(2024, 12, 30));
    assert_eq!(
        result,
        UpcomingBirthdays::Results(vec![entry("Alice", date(2025, 1, 1))])
    );
}

#[test]
fn upcoming_birthdays_honor_custom_policy() {
    let mut directory = Directory::new();
    directory.add(contact("Alice", Some("25.06.1990")));
    directory.add(contact("Bob", Some("15.06.1990")));

    let policy = GreetingPolicy::new(14, false).expect("policy");
    let result = directory.upcoming_birthdays_with(date(2024, 6, 12), policy);
    assert_eq!(
        result,
        UpcomingBirthdays::Results(vec![
            entry("Alice", date(2024, 6, 25)),
            entry("Bob", date(2024, 6, 15)),
        ])
    );
}

#[test]
fn edited_birthday_is_picked_up() {
    let mut directory = Directory::new();
    directory.add(contact("Alice", Some("01.01.1990")));
    directory
        .find_mut("Alice")
        .expect("alice")
        .set_birthday("13.06.1990")
        .expect("birthday");

    let result = directory.upcoming_birthdays(date(2024, 6, 12));
    assert_eq!(result.entries(), &[entry("Alice", date(2024, 6, 13))]);
}
