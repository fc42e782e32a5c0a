//! Filter to keep recently joined mentors only.

use crate::traits::Filter;
use catalog::IndexedMentor;

/// Keeps mentors flagged `is_new`.
pub struct NewMentorFilter;

impl Filter for NewMentorFilter {
    fn name(&self) -> &str {
        "NewMentorFilter"
    }

    fn matches(&self, entry: &IndexedMentor<'_>) -> bool {
        entry.mentor.is_new
    }
}
