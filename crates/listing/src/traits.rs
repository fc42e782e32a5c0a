//! Core trait for the mentor filter pipeline.

use catalog::IndexedMentor;

/// One filter dimension of the mentor list.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared between threads
/// - `matches` is the predicate; `apply` takes ownership of the entries and
///   keeps the ones that pass, preserving their order
/// - filters never fail: a mentor that can't be judged (e.g. a price with no
///   amount) simply doesn't match
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single mentor passes this filter
    fn matches(&self, entry: &IndexedMentor<'_>) -> bool;

    /// Apply this filter to a set of entries.
    fn apply<'a>(&self, entries: Vec<IndexedMentor<'a>>) -> Vec<IndexedMentor<'a>> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
