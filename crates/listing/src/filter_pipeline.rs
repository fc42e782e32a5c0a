//! The FilterPipeline chains the active filters of a `FilterState`.
//!
//! Filters run in sequence, so the result is their conjunction (AND across
//! dimensions). OR semantics inside a dimension live in the individual
//! filters (`TagsFilter`, `ExperienceFilter`).

use crate::filters::*;
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::{Catalog, IndexedMentor};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TagsFilter::new(&["Backend".to_string()]))
///     .add_filter(NewMentorFilter);
///
/// let matched = pipeline.apply(catalog.entries().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a filter state.
    ///
    /// Only dimensions that restrict something are added, cheapest checks
    /// first. Order doesn't change the result, only how much text search
    /// has to scan.
    pub fn for_state(state: &FilterState) -> Self {
        let mut pipeline = Self::new();

        if state.new_mentor() {
            pipeline = pipeline.add_filter(NewMentorFilter);
        }
        if state.no_sessions() {
            pipeline = pipeline.add_filter(NoSessionsFilter);
        }
        if let Some(bucket) = state.price() {
            pipeline = pipeline.add_filter(PriceFilter::new(bucket));
        }
        if !state.experience().is_empty() {
            pipeline = pipeline.add_filter(ExperienceFilter::new(state.experience()));
        }
        if !state.tags().is_empty() {
            pipeline = pipeline.add_filter(TagsFilter::new(state.tags()));
        }
        let search = SearchFilter::new(state.search());
        if search.is_active() {
            pipeline = pipeline.add_filter(search);
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the input entries
    /// 2. For each filter in order, keep the entries it matches
    /// 3. Return what is left, still in input order
    pub fn apply<'a>(&self, entries: Vec<IndexedMentor<'a>>) -> Vec<IndexedMentor<'a>> {
        let mut current = entries;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current);
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }

    /// Catalog positions of every mentor passing the pipeline, in order
    pub fn matching_positions(&self, catalog: &Catalog) -> Vec<usize> {
        self.apply(catalog.entries().collect())
            .into_iter()
            .map(|entry| entry.position)
            .collect()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, ListState, reduce};
    use crate::testing::{build_catalog, mentor};

    fn filters_after(actions: &[Action]) -> FilterState {
        let mut state = ListState::new(10).unwrap();
        for action in actions {
            state = reduce(&state, action, 0);
        }
        state.filters().clone()
    }

    #[test]
    fn test_empty_pipeline() {
        let catalog = build_catalog(vec![mentor(1, "A"), mentor(2, "B")]);
        let pipeline = FilterPipeline::for_state(&FilterState::default());

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.matching_positions(&catalog), vec![0, 1]);
    }

    #[test]
    fn test_only_active_filters_added() {
        let state = filters_after(&[
            Action::SetSearch("rust".to_string()),
            Action::SetNoSessions(true),
            Action::SetPrice(Some(PriceBucket::UpTo2000)),
        ]);
        let pipeline = FilterPipeline::for_state(&state);

        assert_eq!(
            pipeline.filter_names(),
            vec!["NoSessionsFilter", "PriceFilter", "SearchFilter"]
        );
    }

    #[test]
    fn test_filters_are_anded() {
        let mut new_cheap = mentor(1, "New Cheap");
        new_cheap.is_new = true;
        new_cheap.price = "1 000 руб".to_string();
        let mut new_pricey = mentor(2, "New Pricey");
        new_pricey.is_new = true;
        new_pricey.price = "9 000 руб".to_string();
        let mut old_cheap = mentor(3, "Old Cheap");
        old_cheap.price = "500 руб".to_string();
        let catalog = build_catalog(vec![new_cheap, new_pricey, old_cheap]);

        let pipeline = FilterPipeline::new()
            .add_filter(NewMentorFilter)
            .add_filter(PriceFilter::new(PriceBucket::UpTo5000));

        assert_eq!(pipeline.matching_positions(&catalog), vec![0]);
    }
}
