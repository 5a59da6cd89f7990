use std::collections::BTreeSet;

use crate::geo::{GeoPoint, LatLngBounds};
use crate::marker::MarkerId;
use crate::provider::{MapProvider, PopupContent};

/// One call made against a [`RecordingProvider`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    InitSurface { center: GeoPoint, zoom: u32 },
    PlaceMarker(MarkerId),
    SetVisible(MarkerId, bool),
    SetAnimation(MarkerId, bool),
    FitViewport(LatLngBounds),
    OpenPopup(MarkerId),
    SetPopupContent(MarkerId),
    ClosePopup,
}

/// Map provider double that records every call and tracks the resulting
/// widget state.
#[derive(Default)]
pub struct RecordingProvider {
    pub calls: Vec<ProviderCall>,
    pub visible: BTreeSet<MarkerId>,
    pub animated: BTreeSet<MarkerId>,
    pub popup: Option<(MarkerId, PopupContent)>,
    pub last_bounds: Option<LatLngBounds>,
    pub ready: bool,
}

impl RecordingProvider {
    pub fn ready() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    pub fn not_ready() -> Self {
        Self::default()
    }
}

impl MapProvider for RecordingProvider {
    fn init_surface(&mut self, center: GeoPoint, zoom: u32) {
        self.calls.push(ProviderCall::InitSurface { center, zoom });
    }

    fn place_marker(&mut self, id: MarkerId, _location: GeoPoint, _title: &str) {
        self.calls.push(ProviderCall::PlaceMarker(id));
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        self.calls.push(ProviderCall::SetVisible(id, visible));
        if visible {
            self.visible.insert(id);
        } else {
            self.visible.remove(&id);
        }
    }

    fn set_marker_animation(&mut self, id: MarkerId, animated: bool) {
        self.calls.push(ProviderCall::SetAnimation(id, animated));
        if animated {
            self.animated.insert(id);
        } else {
            self.animated.remove(&id);
        }
    }

    fn fit_viewport(&mut self, bounds: LatLngBounds) {
        self.calls.push(ProviderCall::FitViewport(bounds));
        self.last_bounds = Some(bounds);
    }

    fn open_popup(&mut self, id: MarkerId, content: &PopupContent) {
        self.calls.push(ProviderCall::OpenPopup(id));
        self.popup = Some((id, content.clone()));
    }

    fn set_popup_content(&mut self, id: MarkerId, content: &PopupContent) {
        self.calls.push(ProviderCall::SetPopupContent(id));
        self.popup = Some((id, content.clone()));
    }

    fn close_popup(&mut self) {
        self.calls.push(ProviderCall::ClosePopup);
        self.popup = None;
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
