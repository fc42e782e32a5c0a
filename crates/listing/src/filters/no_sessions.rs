//! Filter to keep mentors that have no mentees yet.

use crate::traits::Filter;
use catalog::IndexedMentor;

/// Keeps mentors whose `mentee_count` is zero.
pub struct NoSessionsFilter;

impl Filter for NoSessionsFilter {
    fn name(&self) -> &str {
        "NoSessionsFilter"
    }

    fn matches(&self, entry: &IndexedMentor<'_>) -> bool {
        entry.mentor.mentee_count == 0
    }
}
