//! Filter implementations for the mentor list.
//!
//! One filter per dimension of the filter panel. `FilterPipeline::for_state`
//! picks the ones a `FilterState` activates.

pub mod experience;
pub mod new_mentor;
pub mod no_sessions;
pub mod price;
pub mod search;
pub mod tags;

// Re-export for convenience
pub use experience::{ExperienceFilter, parse_experience_selection};
pub use new_mentor::NewMentorFilter;
pub use no_sessions::NoSessionsFilter;
pub use price::{PriceBucket, PriceFilter, parse_price_selection};
pub use search::SearchFilter;
pub use tags::TagsFilter;
