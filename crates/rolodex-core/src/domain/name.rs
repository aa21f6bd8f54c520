use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !Self::validate(raw) {
            return Err(CoreError::name_validation());
        }
        Ok(Self(raw.to_string()))
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(raw: &str) -> bool {
        raw.chars().count() >= MIN_NAME_CHARS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
