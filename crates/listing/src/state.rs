//! List state and the reducer that advances it.
//!
//! `FilterState` holds the filter panel selections, `ListState` adds
//! pagination. Both are plain values: the only way to change them is
//! `reduce(state, action, matched) -> state'`, which is pure.

use crate::error::{ListingError, Result};
use crate::filters::PriceBucket;
use catalog::Experience;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Page size used when the caller doesn't pick one
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Current selections of the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    tags: Vec<String>,
    experience: BTreeSet<Experience>,
    price: Option<PriceBucket>,
    new_mentor: bool,
    no_sessions: bool,
}

impl FilterState {
    /// Trimmed search text; empty means no search
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selected tags in the order they were picked, without duplicates
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn experience(&self) -> &BTreeSet<Experience> {
        &self.experience
    }

    pub fn price(&self) -> Option<PriceBucket> {
        self.price
    }

    pub fn new_mentor(&self) -> bool {
        self.new_mentor
    }

    pub fn no_sessions(&self) -> bool {
        self.no_sessions
    }

    /// True when no dimension restricts the list
    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Everything a user can do to the mentor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearch(String),
    SetTags(Vec<String>),
    SetExperience(Vec<Experience>),
    /// `None` clears the price selection
    SetPrice(Option<PriceBucket>),
    SetNewMentor(bool),
    SetNoSessions(bool),
    /// Reveal the next page
    ShowMore,
    /// Clear every filter
    Reset,
}

impl Action {
    /// Short name for logs and analytics
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetSearch(_) => "search",
            Action::SetTags(_) => "tags",
            Action::SetExperience(_) => "experience",
            Action::SetPrice(_) => "price",
            Action::SetNewMentor(_) => "new_mentor",
            Action::SetNoSessions(_) => "no_sessions",
            Action::ShowMore => "show_more",
            Action::Reset => "reset",
        }
    }

    /// Every action except `ShowMore` changes the filters and therefore
    /// the matched set.
    pub fn is_filter_change(&self) -> bool {
        !matches!(self, Action::ShowMore)
    }
}

/// Filter selections plus pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    filters: FilterState,
    page_size: NonZeroUsize,
    cutoff: usize,
}

impl ListState {
    /// Fresh state: no filters, first page.
    pub fn new(page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ListingError::ZeroPageSize)?;
        Ok(Self::with_page_size(page_size))
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            filters: FilterState::default(),
            page_size,
            cutoff: page_size.get(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// How many matched mentors are revealed.
    ///
    /// Starts at the page size even when fewer mentors match; visible
    /// output is always clamped to the matched count.
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Whether more matches exist past the cutoff
    pub fn has_more(&self, matched: usize) -> bool {
        self.cutoff < matched
    }
}

/// Advance the list state by one action.
///
/// `matched` is the number of mentors matching `state`'s current filters;
/// only `ShowMore` reads it. Filter changes reset the cutoff to one page,
/// `ShowMore` grows it by one page without passing `matched`, and does
/// nothing once everything is shown.
pub fn reduce(state: &ListState, action: &Action, matched: usize) -> ListState {
    let mut next = state.clone();

    if action.is_filter_change() {
        next.cutoff = state.page_size.get();
    }

    match action {
        Action::SetSearch(text) => {
            next.filters.search = text.trim().to_string();
        }
        Action::SetTags(tags) => {
            let mut selected: Vec<String> = Vec::with_capacity(tags.len());
            for tag in tags {
                if !tag.is_empty() && !selected.contains(tag) {
                    selected.push(tag.clone());
                }
            }
            next.filters.tags = selected;
        }
        Action::SetExperience(buckets) => {
            next.filters.experience = buckets.iter().copied().collect();
        }
        Action::SetPrice(bucket) => {
            next.filters.price = *bucket;
        }
        Action::SetNewMentor(flag) => {
            next.filters.new_mentor = *flag;
        }
        Action::SetNoSessions(flag) => {
            next.filters.no_sessions = *flag;
        }
        Action::ShowMore => {
            if state.cutoff < matched {
                next.cutoff = state
                    .cutoff
                    .saturating_add(state.page_size.get())
                    .min(matched);
            }
        }
        Action::Reset => {
            next.filters = FilterState::default();
        }
    }

    next
}
