//! Error types for the catalog crate.
//!
//! Every failure here happens while reading or validating a catalog file.
//! Once a `Catalog` exists, nothing that reads it can fail.

use thiserror::Error;

use crate::types::MentorId;

/// Errors that can occur while loading a mentor catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid catalog JSON
    ///
    /// `line` and `column` come straight from serde_json
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two records share the same identifier
    #[error("Duplicate mentor id {id} (slugs '{first}' and '{second}')")]
    DuplicateId {
        id: MentorId,
        first: String,
        second: String,
    },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
