//! # Catalog Crate
//!
//! Loads the public mentor list and prepares it for filtering.
//!
//! ## Main Components
//!
//! - **types**: Domain types (MentorListItem, Experience, Catalog)
//! - **parser**: Parse catalog JSON and free-text prices
//! - **index**: Build lookup indices and per-mentor search profiles
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/mentors.json"))?.into_visible();
//! let anna = catalog.get_by_slug("anna-7").unwrap();
//! println!("{} works as {}", anna.name, anna.job);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::parse_price;
pub use types::{
    // Type aliases
    MentorId,
    // Core types
    MentorListItem,
    Catalog,
    IndexedMentor,
    SearchProfile,
    // Enums
    Experience,
    CalendarType,
};
