use thiserror::Error;

pub const NAME_VALIDATION_MESSAGE: &str = "Length must be at least 1 character in string format";
pub const PHONE_VALIDATION_MESSAGE: &str = "The phone number must be 10 characters long.";
pub const DATE_FORMAT_MESSAGE: &str = "Invalid date format. Use DD.MM.YYYY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{message}")]
    NameValidation { message: String },
    #[error("{message}")]
    PhoneValidation { message: String },
    #[error("{message}")]
    DateFormat { message: String },
    #[error("phone number {0} not found")]
    PhoneNotFound(String),
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn name_validation() -> Self {
        Self::NameValidation {
            message: NAME_VALIDATION_MESSAGE.to_string(),
        }
    }

    pub fn phone_validation() -> Self {
        Self::PhoneValidation {
            message: PHONE_VALIDATION_MESSAGE.to_string(),
        }
    }

    pub fn date_format() -> Self {
        Self::DateFormat {
            message: DATE_FORMAT_MESSAGE.to_string(),
        }
    }

    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::NameValidation { .. }
            | CoreError::PhoneValidation { .. }
            | CoreError::DateFormat { .. }
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::Validation,
            CoreError::PhoneNotFound(_) => CoreErrorKind::NotFound,
        }
    }
}
