pub mod cs;
pub mod error;

pub use cs::{hashing, linear};
pub use error::{Error, Result};
