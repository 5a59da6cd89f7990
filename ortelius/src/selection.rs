//! Tracking of the active marker and the content popup.
//!
//! At most one marker is active across the whole registry. Selecting a new
//! marker deactivates the previous one before activating the target, so the
//! highlight and the animation can never be on for two markers at once. The
//! popup lifecycle is deliberately decoupled from the highlight flag:
//! closing the popup clears the selection but leaves the highlight of the
//! last active marker as it was.

use crate::marker::{MarkerId, MarkerStore};
use crate::provider::{MapProvider, PopupContent};

/// State machine for marker activation and the popup bound to it.
#[derive(Default)]
pub struct SelectionController {
    active: Option<MarkerId>,
    popup_bound_to: Option<MarkerId>,
}

impl SelectionController {
    /// The currently active marker, if any.
    pub fn active(&self) -> Option<MarkerId> {
        self.active
    }

    /// The marker the popup is currently bound to, if it is open.
    pub fn popup_marker(&self) -> Option<MarkerId> {
        self.popup_bound_to
    }

    /// Activates the given marker and opens the popup for it.
    ///
    /// If the popup is already bound to this marker the call is a no-op: the
    /// content is not regenerated and the popup is not re-opened. Otherwise
    /// the previously active marker (if any) is deactivated first.
    pub fn select(
        &mut self,
        id: MarkerId,
        store: &mut MarkerStore,
        provider: &mut impl MapProvider,
    ) {
        if self.popup_bound_to == Some(id) {
            return;
        }

        if store.get(id).is_none() {
            log::warn!("selected marker id {} is out of range", id.index());
            return;
        }

        if let Some(previous) = self.active.take() {
            if previous != id {
                let _ = store.set_highlighted(previous, false);
                provider.set_marker_animation(previous, false);
            }
        }

        let _ = store.set_highlighted(id, true);
        provider.set_marker_animation(id, true);
        self.active = Some(id);

        if let Some(marker) = store.get(id) {
            let content = PopupContent::for_marker(marker);
            provider.open_popup(id, &content);
            self.popup_bound_to = Some(id);
        }
    }

    /// Handles an explicit dismissal of the popup.
    ///
    /// Clears the popup binding and the active selection. The highlight flag
    /// of the previously active marker is left untouched.
    pub fn popup_closed(&mut self) {
        self.popup_bound_to = None;
        self.active = None;
    }

    /// Pushes refreshed content into the popup if it is currently bound to
    /// the given marker. Called when the marker's annotation arrives after
    /// the popup was opened.
    pub fn refresh_popup(
        &self,
        id: MarkerId,
        store: &MarkerStore,
        provider: &mut impl MapProvider,
    ) {
        if self.popup_bound_to != Some(id) {
            return;
        }

        if let Some(marker) = store.get(id) {
            provider.set_popup_content(id, &PopupContent::for_marker(marker));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place;
    use crate::tests::{ProviderCall, RecordingProvider};

    fn setup() -> (MarkerStore, SelectionController, RecordingProvider) {
        let store = MarkerStore::new(&place::defaults());
        (
            store,
            SelectionController::default(),
            RecordingProvider::ready(),
        )
    }

    fn id(store: &MarkerStore, index: usize) -> MarkerId {
        store
            .iter()
            .nth(index)
            .expect("index is within the store")
            .0
    }

    #[test]
    fn select_activates_marker_and_opens_popup() {
        let (mut store, mut selection, mut provider) = setup();
        let park = id(&store, 0);

        selection.select(park, &mut store, &mut provider);

        assert_eq!(selection.active(), Some(park));
        assert!(store.get(park).expect("id is valid").is_highlighted());
        assert!(provider.animated.contains(&park));

        let (popup_id, content) = provider.popup.as_ref().expect("popup is open");
        assert_eq!(*popup_id, park);
        assert_eq!(content.title, "Park Avenue");
        assert_eq!(content.body, "");
    }

    #[test]
    fn reselecting_the_popup_marker_is_a_noop() {
        let (mut store, mut selection, mut provider) = setup();
        let park = id(&store, 0);

        selection.select(park, &mut store, &mut provider);
        let calls_before = provider.calls.len();

        selection.select(park, &mut store, &mut provider);

        assert_eq!(provider.calls.len(), calls_before);
        assert_eq!(
            provider
                .calls
                .iter()
                .filter(|call| matches!(call, ProviderCall::OpenPopup(_)))
                .count(),
            1
        );
    }

    #[test]
    fn selecting_another_marker_deactivates_the_previous_one() {
        let (mut store, mut selection, mut provider) = setup();
        let park = id(&store, 0);
        let starbucks = id(&store, 1);

        selection.select(park, &mut store, &mut provider);
        store
            .annotate(starbucks, "A coffee chain store.")
            .expect("id is valid");
        selection.select(starbucks, &mut store, &mut provider);

        assert_eq!(selection.active(), Some(starbucks));
        assert!(!store.get(park).expect("id is valid").is_highlighted());
        assert!(store.get(starbucks).expect("id is valid").is_highlighted());
        assert!(!provider.animated.contains(&park));
        assert!(provider.animated.contains(&starbucks));

        let (popup_id, content) = provider.popup.as_ref().expect("popup is open");
        assert_eq!(*popup_id, starbucks);
        assert_eq!(content.title, "Starbucks");
        assert_eq!(content.body, "A coffee chain store.");
    }

    #[test]
    fn popup_close_clears_selection_but_not_highlight() {
        let (mut store, mut selection, mut provider) = setup();
        let park = id(&store, 0);

        selection.select(park, &mut store, &mut provider);
        selection.popup_closed();

        assert_eq!(selection.active(), None);
        assert_eq!(selection.popup_marker(), None);
        assert!(store.get(park).expect("id is valid").is_highlighted());
    }

    #[test]
    fn reselect_after_close_reopens_the_popup() {
        let (mut store, mut selection, mut provider) = setup();
        let park = id(&store, 0);

        selection.select(park, &mut store, &mut provider);
        selection.popup_closed();
        selection.select(park, &mut store, &mut provider);

        assert_eq!(
            provider
                .calls
                .iter()
                .filter(|call| matches!(call, ProviderCall::OpenPopup(_)))
                .count(),
            2
        );
        assert_eq!(selection.popup_marker(), Some(park));
    }

    #[test]
    fn refresh_popup_updates_only_the_bound_marker() {
        let (mut store, mut selection, mut provider) = setup();
        let park = id(&store, 0);
        let starbucks = id(&store, 1);

        selection.select(park, &mut store, &mut provider);

        store
            .annotate(starbucks, "A coffee chain store.")
            .expect("id is valid");
        selection.refresh_popup(starbucks, &store, &mut provider);
        let (_, content) = provider.popup.as_ref().expect("popup is open");
        assert_eq!(content.body, "");

        store
            .annotate(park, "A wide avenue in Manhattan.")
            .expect("id is valid");
        selection.refresh_popup(park, &store, &mut provider);
        let (popup_id, content) = provider.popup.as_ref().expect("popup is open");
        assert_eq!(*popup_id, park);
        assert_eq!(content.body, "A wide avenue in Manhattan.");
    }

    #[test]
    fn selecting_an_unknown_id_is_tolerated() {
        let (mut store, mut selection, mut provider) = setup();
        // An id the store never handed out.
        let bogus = MarkerId::from_index(store.len());

        selection.select(bogus, &mut store, &mut provider);

        assert_eq!(selection.active(), None);
        assert!(provider.popup.is_none());
    }
}
