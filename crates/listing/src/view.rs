//! A paginated, filtered view over a mentor catalog.
//!
//! `MentorListView` owns a `ListState`, the positions of the mentors that
//! currently match, and an `EventSink`. Every operation goes through
//! `dispatch`, which runs the reducer, recomputes matches on filter
//! changes, and reports the event.

use crate::error::Result;
use crate::events::{EventSink, ListEvent, TracingSink};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::PriceBucket;
use crate::state::{Action, FilterState, ListState, reduce};
use catalog::{Catalog, Experience, MentorListItem};
use tracing::debug;

/// Filtered, paginated mentor list.
///
/// Borrows the catalog, so views are cheap to create and several can share
/// one catalog.
pub struct MentorListView<'a, S = TracingSink> {
    catalog: &'a Catalog,
    state: ListState,
    /// Catalog positions of matching mentors, in catalog order
    matched: Vec<usize>,
    sink: S,
}

impl<'a> MentorListView<'a> {
    /// Create a view that logs events through tracing.
    pub fn new(catalog: &'a Catalog, page_size: usize) -> Result<Self> {
        Self::with_sink(catalog, page_size, TracingSink)
    }
}

impl<'a, S: EventSink> MentorListView<'a, S> {
    /// Create a view with an explicit event sink.
    pub fn with_sink(catalog: &'a Catalog, page_size: usize, sink: S) -> Result<Self> {
        let state = ListState::new(page_size)?;
        let matched = FilterPipeline::for_state(state.filters()).matching_positions(catalog);
        Ok(Self {
            catalog,
            state,
            matched,
            sink,
        })
    }

    /// Apply one action to the view.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action, self.matched.len());

        if action.is_filter_change() {
            self.matched = FilterPipeline::for_state(next.filters()).matching_positions(self.catalog);
        }
        self.state = next;

        debug!(
            "Dispatched {} (matched: {}, cutoff: {})",
            action.name(),
            self.matched.len(),
            self.state.cutoff()
        );
        self.sink.record(&ListEvent {
            action: &action,
            matched: self.matched.len(),
            cutoff: self.state.cutoff(),
            total: self.catalog.len(),
        });
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.dispatch(Action::SetSearch(text.into()));
    }

    pub fn set_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.dispatch(Action::SetTags(tags.into_iter().map(Into::into).collect()));
    }

    pub fn set_experience(&mut self, buckets: impl IntoIterator<Item = Experience>) {
        self.dispatch(Action::SetExperience(buckets.into_iter().collect()));
    }

    /// `None` clears the price selection
    pub fn set_price(&mut self, bucket: Option<PriceBucket>) {
        self.dispatch(Action::SetPrice(bucket));
    }

    pub fn set_new_mentor(&mut self, only_new: bool) {
        self.dispatch(Action::SetNewMentor(only_new));
    }

    pub fn set_no_sessions(&mut self, only_without_sessions: bool) {
        self.dispatch(Action::SetNoSessions(only_without_sessions));
    }

    pub fn show_more(&mut self) {
        self.dispatch(Action::ShowMore);
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Matching mentors up to the cutoff, in catalog order
    pub fn visible_mentors(&self) -> Vec<&'a MentorListItem> {
        let catalog = self.catalog;
        self.matched
            .iter()
            .take(self.state.cutoff())
            .filter_map(|&position| catalog.mentors().get(position))
            .collect()
    }

    /// Every matching mentor, ignoring the cutoff
    pub fn matched_mentors(&self) -> impl Iterator<Item = &'a MentorListItem> + '_ {
        let catalog = self.catalog;
        self.matched
            .iter()
            .filter_map(move |&position| catalog.mentors().get(position))
    }

    pub fn has_more_mentors(&self) -> bool {
        self.state.has_more(self.matched.len())
    }

    pub fn cutoff(&self) -> usize {
        self.state.cutoff()
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn filters(&self) -> &FilterState {
        self.state.filters()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
