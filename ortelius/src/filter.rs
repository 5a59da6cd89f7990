//! Filtering of the marker registry by the live search string.
//!
//! There is no implicit reactivity here: [`visible_subset`] is a pure
//! function over the store and the query, and the viewer re-invokes it
//! explicitly whenever either input changes.

use crate::marker::{MarkerId, MarkerStore};

/// The live search string.
///
/// The state is a plain owned string; [`SearchState::set`] reports whether
/// the value actually changed so the caller knows to recompute the visible
/// subset. Updates are applied on every keystroke (push model, no
/// debouncing).
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    /// Current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query. Returns true if the new value differs from the
    /// old one.
    pub fn set(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }

        self.query = query;
        true
    }
}

/// Computes the subset of markers visible under the given query.
///
/// A marker is visible iff its title starts with the query, compared
/// case-insensitively. An empty query makes every marker visible. The result
/// preserves store order.
pub fn visible_subset(store: &MarkerStore, query: &str) -> Vec<MarkerId> {
    if query.is_empty() {
        return store.iter().map(|(id, _)| id).collect();
    }

    let query = query.to_lowercase();
    store
        .iter()
        .filter(|(_, marker)| marker.title().to_lowercase().starts_with(&query))
        .map(|(id, _)| id)
        .collect()
}
