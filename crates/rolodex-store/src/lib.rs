pub mod directory;
pub mod error;
pub mod upcoming;

pub use directory::Directory;
pub use error::{Result, StoreError, StoreErrorKind};
