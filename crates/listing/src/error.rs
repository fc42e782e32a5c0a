//! Errors raised while turning user input into list state.
//!
//! Filtering itself cannot fail; these only come from constructing a view or
//! parsing a selection typed by a user.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListingError {
    #[error("Page size must be at least 1")]
    ZeroPageSize,

    #[error("Unknown price bucket: '{0}'")]
    UnknownPriceBucket(String),

    #[error("Unknown experience code: '{0}' (expected one of 0-2, 2-5, 5-10, 10+)")]
    UnknownExperience(String),
}

pub type Result<T> = std::result::Result<T, ListingError>;
