//! Ortelius is the core of an interactive point-of-interest map viewer. It
//! keeps a registry of markers bound to a map widget, filters the registry
//! with a live search string, tracks which marker is active, and enriches
//! every marker with a one-line description fetched from a Wikipedia-style
//! search endpoint.
//!
//! The map widget itself is not part of this crate: anything that can place
//! a marker, fit a viewport and show a popup can host a viewer by
//! implementing the [`MapProvider`] trait.
//!
//! # Quick start
//!
//! ```no_run
//! use ortelius::{NullMapProvider, ViewerBuilder, ViewerEvent};
//!
//! # tokio_test::block_on(async {
//! let mut viewer = ViewerBuilder::default().build(NullMapProvider);
//!
//! // Typing into the search box narrows the marker list and the map.
//! viewer.handle_event(ViewerEvent::SearchChanged("sta".into()));
//! for (_, marker) in viewer.visible_markers() {
//!     println!("{}", marker.title());
//! }
//!
//! // Once per loop iteration: apply finished annotation fetches and check
//! // that the map widget came up.
//! viewer.tick();
//! # });
//! ```
//!
//! # Main components
//!
//! * [`MarkerStore`] owns one [`Marker`] per seed [`Place`] and is the only
//!   place marker state is mutated.
//! * [`visible_subset`] derives the markers matching the current search
//!   query; it is recomputed explicitly on every input change.
//! * [`SelectionController`] keeps the single active marker and the popup
//!   bound to it.
//! * [`ViewBinder`] reconciles the map widget with the visible subset and
//!   refits the viewport.
//! * [`AnnotationProvider`] fetches descriptions; completions come back
//!   through a channel and are applied by [`Viewer::tick`].
//! * [`Viewer`] wires all of the above together and consumes
//!   [`ViewerEvent`]s from the host.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod annotation;
mod async_runtime;
pub mod binder;
pub mod error;
pub mod filter;
pub mod geo;
pub mod marker;
mod messenger;
pub mod place;
pub mod provider;
pub mod selection;
pub mod viewer;
pub mod watchdog;

#[cfg(test)]
mod tests;

pub use annotation::{
    AnnotationProvider, AnnotationUpdate, OpensearchProvider, FALLBACK_ANNOTATION,
};
pub use binder::ViewBinder;
pub use error::OrteliusError;
pub use filter::{visible_subset, SearchState};
pub use geo::{GeoPoint, LatLngBounds};
pub use marker::{Marker, MarkerId, MarkerStore};
pub use messenger::{DummyMessenger, Messenger};
pub use place::Place;
pub use provider::{MapProvider, NullMapProvider, PopupContent};
pub use selection::SelectionController;
pub use viewer::{Drawer, Viewer, ViewerBuilder, ViewerEvent, DRAWER_WIDTH_PX};
pub use watchdog::{LoadWatchdog, MapLoadState, DEFAULT_LOAD_TIMEOUT};
