//! Filtering and pagination for the public mentor list.
//!
//! This crate provides:
//! - Filter trait and one implementation per filter-panel dimension
//! - FilterPipeline for composing the active filters
//! - FilterState / ListState with a pure `reduce` function
//! - MentorListView, the stateful wrapper a UI or CLI drives
//!
//! ## Semantics
//! A mentor is shown when it passes every active dimension (AND across
//! dimensions). Within tags and experience any selected value is enough
//! (OR within a dimension). Filtering never reorders: matches keep catalog
//! order. Every filter change resets the list to its first page.
//!
//! ## Example Usage
//! ```ignore
//! use listing::{MentorListView, PriceBucket};
//!
//! let mut view = MentorListView::new(&catalog, 12)?;
//! view.set_tags(["Backend"]);
//! view.set_price(Some(PriceBucket::UpTo5000));
//!
//! for mentor in view.visible_mentors() {
//!     println!("{}", mentor.name);
//! }
//! if view.has_more_mentors() {
//!     view.show_more();
//! }
//! ```

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod state;
pub mod events;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export main types
pub use error::{ListingError, Result};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use filters::{PriceBucket, parse_experience_selection, parse_price_selection};
pub use state::{Action, DEFAULT_PAGE_SIZE, FilterState, ListState, reduce};
pub use events::{EventSink, ListEvent, NoopSink, TracingSink};
pub use view::MentorListView;
