use crate::domain::birthday::Birthday;
use crate::domain::name::Name;
use crate::domain::phone::PhoneNumber;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one fixed name, any number of phones, an optional birthday.
///
/// Fields are private so every phone and birthday goes through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Duplicate values are accepted.
    pub fn add_phone(&mut self, value: &str) -> Result<(), CoreError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<(), CoreError> {
        let index = self
            .position_of(value)
            .ok_or_else(|| CoreError::PhoneNotFound(value.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Leaves the record untouched when either phone is rejected.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> Result<(), CoreError> {
        let replacement = PhoneNumber::new(new_value)?;
        self.remove_phone(old_value)?;
        self.phones.push(replacement);
        Ok(())
    }

    pub fn set_birthday(&mut self, value: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    pub fn set_birthday_date(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == value)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ContactRecord;
    use crate::error::CoreError;

    fn phone_values(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(|phone| phone.as_str()).collect()
    }

    #[test]
    fn new_record_requires_valid_name() {
        assert_eq!(
            ContactRecord::new("J").unwrap_err(),
            CoreError::name_validation()
        );
        let record = ContactRecord::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn add_phone_validates_before_appending() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            record.add_phone("12345").unwrap_err(),
            CoreError::phone_validation()
        );
        assert_eq!(phone_values(&record), vec!["1234567890"]);
    }

    #[test]
    fn add_phone_keeps_duplicates() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn remove_phone_drops_first_match_only() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        record.remove_phone("1111111111").unwrap();
        assert_eq!(phone_values(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn remove_missing_phone_leaves_list_unchanged() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        let err = record.remove_phone("9999999999").unwrap_err();
        assert_eq!(err, CoreError::PhoneNotFound("9999999999".to_string()));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn find_phone_returns_first_match() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(
            record.find_phone("1111111111").map(|p| p.as_str()),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn edit_phone_replaces_value() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn edit_phone_with_invalid_value_is_atomic() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(
            record.edit_phone("1111111111", "bad").unwrap_err(),
            CoreError::phone_validation()
        );
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn edit_phone_with_missing_old_value_is_atomic() {
        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        assert!(matches!(
            record.edit_phone("2222222222", "3333333333"),
            Err(CoreError::PhoneNotFound(_))
        ));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn set_birthday_overwrites_and_rejects_bad_input() {
        let mut record = ContactRecord::new("John").unwrap();
        record.set_birthday("01.02.1990").unwrap();
        record.set_birthday("03.04.1985").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "03.04.1985");

        assert_eq!(
            record.set_birthday("1985/04/03").unwrap_err(),
            CoreError::date_format()
        );
        assert_eq!(record.birthday().unwrap().to_string(), "03.04.1985");

        record.clear_birthday();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn describe_lists_phones() {
        let mut record = ContactRecord::new("John").unwrap();
        assert_eq!(record.describe(), "Contact name: John, phones: ");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: John, phones: 1111111111; 2222222222"
        );
    }
}
