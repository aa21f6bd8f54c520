use rolodex_core::{CoreError, CoreErrorKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record for {0} not found")]
    NotFound(String),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    NotFound,
    Core,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::Core(err) => match err.kind() {
                CoreErrorKind::NotFound => StoreErrorKind::NotFound,
                CoreErrorKind::Validation => StoreErrorKind::Core,
            },
        }
    }
}
