//! Synchronization of the marker registry with the map widget.
//!
//! The [`ViewBinder`] is the only component that calls the placement,
//! visibility and viewport primitives of the [`MapProvider`]. Everything
//! else mutates the registry or the selection and leaves it to the binder to
//! reconcile the widget with the current visible subset.

use ahash::AHashSet;

use crate::geo::{GeoPoint, LatLngBounds};
use crate::marker::{MarkerId, MarkerStore};
use crate::provider::MapProvider;

/// Keeps the set of markers shown on the map widget in sync with the visible
/// subset computed by the filter.
#[derive(Default)]
pub struct ViewBinder {
    shown: AHashSet<MarkerId>,
}

impl ViewBinder {
    /// Adds every marker of the store to the map widget.
    ///
    /// Called once at startup, before the first [`ViewBinder::sync`].
    pub fn place_all(&self, store: &MarkerStore, provider: &mut impl MapProvider) {
        for (id, marker) in store.iter() {
            provider.place_marker(id, marker.location(), marker.title());
        }
    }

    /// Reconciles the map widget with the given visible subset.
    ///
    /// Markers in the subset that are not currently shown are shown; markers
    /// shown but absent from the subset are hidden; the store's hidden flags
    /// are updated to match. Afterwards the viewport is refit to bound
    /// exactly the visible markers. An empty subset leaves the viewport
    /// untouched.
    pub fn sync(
        &mut self,
        visible: &[MarkerId],
        store: &mut MarkerStore,
        provider: &mut impl MapProvider,
    ) {
        let visible_set: AHashSet<MarkerId> = visible.iter().copied().collect();

        let to_hide: Vec<MarkerId> = self
            .shown
            .iter()
            .copied()
            .filter(|id| !visible_set.contains(id))
            .collect();
        for id in to_hide {
            self.shown.remove(&id);
            provider.set_marker_visible(id, false);
            let _ = store.set_hidden(id, true);
        }

        for id in visible {
            if self.shown.insert(*id) {
                provider.set_marker_visible(*id, true);
                let _ = store.set_hidden(*id, false);
            }
        }

        let locations: Vec<GeoPoint> = visible
            .iter()
            .filter_map(|id| store.get(*id))
            .map(|marker| marker.location())
            .collect();
        if let Some(bounds) = LatLngBounds::from_points(locations.iter()) {
            provider.fit_viewport(bounds);
        }
    }

    /// Returns true if the marker is currently shown on the map widget.
    pub fn is_shown(&self, id: MarkerId) -> bool {
        self.shown.contains(&id)
    }
}
