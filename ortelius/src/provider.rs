//! The seam between the viewer core and the actual map widget.
//!
//! Everything the viewer needs from a mapping library is expressed by the
//! [`MapProvider`] trait: placing markers, toggling their visibility and
//! animation, fitting the viewport and driving the content popup. The widget
//! itself (rendering, icons, animation playback) is outside of this crate;
//! an application implements the trait over whatever map widget it embeds.

use maybe_sync::{MaybeSend, MaybeSync};

use crate::geo::{GeoPoint, LatLngBounds};
use crate::marker::{Marker, MarkerId};

/// Content of the marker popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Title line.
    pub title: String,
    /// Position of the marker the popup is anchored to.
    pub location: GeoPoint,
    /// Description text. Empty while the annotation fetch for the marker is
    /// still outstanding.
    pub body: String,
}

impl PopupContent {
    /// Builds popup content for the given marker.
    pub fn for_marker(marker: &Marker) -> Self {
        Self {
            title: marker.title().to_string(),
            location: marker.location(),
            body: marker.annotation().unwrap_or_default().to_string(),
        }
    }
}

/// Capability set required of the host map widget.
///
/// All calls are idempotent from the widget's point of view: showing an
/// already visible marker or closing an already closed popup must be safe.
pub trait MapProvider: MaybeSend + MaybeSync {
    /// Creates the map surface centered at the given point.
    fn init_surface(&mut self, center: GeoPoint, zoom: u32);

    /// Adds a marker to the map. Called exactly once per marker, before any
    /// other call referencing its id.
    fn place_marker(&mut self, id: MarkerId, location: GeoPoint, title: &str);

    /// Shows or hides a previously placed marker.
    fn set_marker_visible(&mut self, id: MarkerId, visible: bool);

    /// Starts or stops the "active" animation of a marker.
    fn set_marker_animation(&mut self, id: MarkerId, animated: bool);

    /// Adjusts the viewport so that it contains the given extent.
    fn fit_viewport(&mut self, bounds: LatLngBounds);

    /// Opens the popup anchored to the given marker, replacing any popup
    /// that is currently open.
    fn open_popup(&mut self, id: MarkerId, content: &PopupContent);

    /// Replaces the content of the popup without re-opening it.
    fn set_popup_content(&mut self, id: MarkerId, content: &PopupContent);

    /// Closes the popup if one is open.
    fn close_popup(&mut self);

    /// Whether the widget has finished loading and is able to display the
    /// map. Consumed by the load watchdog.
    fn is_ready(&self) -> bool;
}

/// A [`MapProvider`] that ignores all calls and reports itself ready.
///
/// Useful for tests and for running the viewer headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMapProvider;

impl MapProvider for NullMapProvider {
    fn init_surface(&mut self, _center: GeoPoint, _zoom: u32) {}
    fn place_marker(&mut self, _id: MarkerId, _location: GeoPoint, _title: &str) {}
    fn set_marker_visible(&mut self, _id: MarkerId, _visible: bool) {}
    fn set_marker_animation(&mut self, _id: MarkerId, _animated: bool) {}
    fn fit_viewport(&mut self, _bounds: LatLngBounds) {}
    fn open_popup(&mut self, _id: MarkerId, _content: &PopupContent) {}
    fn set_popup_content(&mut self, _id: MarkerId, _content: &PopupContent) {}
    fn close_popup(&mut self) {}

    fn is_ready(&self) -> bool {
        true
    }
}
