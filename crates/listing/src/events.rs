//! Analytics hook for list interactions.
//!
//! A view reports every dispatched action to an `EventSink` it was given at
//! construction. The default sink writes a tracing event; tests and
//! embedders plug in their own.

use crate::state::Action;
use tracing::{debug, info};

/// What happened to a list view, reported after the state changed.
#[derive(Debug, Clone, Copy)]
pub struct ListEvent<'a> {
    pub action: &'a Action,
    /// Mentors matching the filters after the action
    pub matched: usize,
    /// Cutoff after the action
    pub cutoff: usize,
    /// Mentors in the catalog
    pub total: usize,
}

/// Receives list events.
pub trait EventSink {
    fn record(&mut self, event: &ListEvent<'_>);
}

/// Logs filter changes at info and pagination at debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &ListEvent<'_>) {
        if event.action.is_filter_change() {
            info!(
                action = event.action.name(),
                matched = event.matched,
                total = event.total,
                "mentor list filter changed"
            );
        } else {
            debug!(
                action = event.action.name(),
                cutoff = event.cutoff,
                matched = event.matched,
                "mentor list paged"
            );
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&mut self, _event: &ListEvent<'_>) {}
}
