//! The viewer itself: one context object owning all of the moving parts.
//!
//! [`Viewer`] replaces the global mutable state of a typical single-page map
//! app with explicit ownership: it holds the marker registry, the search
//! state, the selection controller, the view binder, the map provider handle
//! and the annotation channel, and it is the only place where those parts
//! are wired together. User input arrives as explicit [`ViewerEvent`]s;
//! asynchronous annotation completions and the load watchdog are serviced by
//! [`Viewer::tick`] from the host's event loop.

use crate::annotation::{AnnotationReceiver, AnnotationUpdate, FALLBACK_ANNOTATION};
use crate::binder::ViewBinder;
use crate::filter::{visible_subset, SearchState};
use crate::marker::{Marker, MarkerId, MarkerStore};
use crate::messenger::Messenger;
use crate::provider::MapProvider;
use crate::selection::SelectionController;
use crate::watchdog::{LoadWatchdog, MapLoadState};

mod builder;
pub use builder::ViewerBuilder;

/// Width of the navigation drawer when open, in pixels.
pub const DRAWER_WIDTH_PX: u32 = 300;

/// User input event consumed by [`Viewer::handle_event`].
///
/// There is no implicit reactivity anywhere in the crate: whatever surface
/// the host renders (a search input, the marker list, the map widget's own
/// click events) is translated into one of these and dispatched explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// The search input changed. Fired on every keystroke.
    SearchChanged(String),
    /// A marker was activated, either by clicking it on the map or by
    /// clicking its entry in the rendered list.
    MarkerActivated(MarkerId),
    /// The popup was explicitly dismissed.
    PopupClosed,
    /// The navigation drawer open/close control was used.
    DrawerToggled,
}

/// State of the sliding navigation drawer.
///
/// The drawer opens to a fixed width; there is no animation state here, the
/// host simply applies [`Drawer::width_px`] to its panel.
#[derive(Debug, Clone)]
pub struct Drawer {
    open: bool,
}

impl Default for Drawer {
    fn default() -> Self {
        // The drawer starts open, matching the initial page layout.
        Self { open: true }
    }
}

impl Drawer {
    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the drawer state.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Width the host should give the drawer panel.
    pub fn width_px(&self) -> u32 {
        if self.open {
            DRAWER_WIDTH_PX
        } else {
            0
        }
    }
}

/// An interactive point-of-interest map viewer bound to a map widget.
///
/// Created through [`ViewerBuilder`]. The viewer owns its state exclusively;
/// the host drives it by dispatching [`ViewerEvent`]s and calling
/// [`Viewer::tick`] once per loop iteration.
pub struct Viewer<P: MapProvider> {
    store: MarkerStore,
    search: SearchState,
    selection: SelectionController,
    binder: ViewBinder,
    provider: P,
    annotations: AnnotationReceiver,
    watchdog: LoadWatchdog,
    drawer: Drawer,
    messenger: Option<Box<dyn Messenger>>,
}

impl<P: MapProvider> Viewer<P> {
    pub(crate) fn new(
        store: MarkerStore,
        provider: P,
        annotations: AnnotationReceiver,
        watchdog: LoadWatchdog,
        messenger: Option<Box<dyn Messenger>>,
    ) -> Self {
        let mut viewer = Self {
            store,
            search: SearchState::default(),
            selection: SelectionController::default(),
            binder: ViewBinder::default(),
            provider,
            annotations,
            watchdog,
            drawer: Drawer::default(),
            messenger,
        };

        viewer.binder.place_all(&viewer.store, &mut viewer.provider);
        viewer.resync();
        viewer
    }

    /// Dispatches a user input event.
    pub fn handle_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::SearchChanged(query) => {
                if self.search.set(query) {
                    self.resync();
                    self.request_redraw();
                }
            }
            ViewerEvent::MarkerActivated(id) => {
                self.selection
                    .select(id, &mut self.store, &mut self.provider);
                self.request_redraw();
            }
            ViewerEvent::PopupClosed => {
                self.selection.popup_closed();
                self.provider.close_popup();
                self.request_redraw();
            }
            ViewerEvent::DrawerToggled => {
                self.drawer.toggle();
                self.request_redraw();
            }
        }
    }

    /// Services the asynchronous parts of the viewer.
    ///
    /// Applies any annotation fetches that completed since the last call
    /// (falling back to [`FALLBACK_ANNOTATION`] for failed ones and
    /// refreshing the popup if it shows the affected marker) and advances
    /// the load watchdog. Returns the current widget load state.
    pub fn tick(&mut self) -> MapLoadState {
        let mut changed = false;
        while let Ok(update) = self.annotations.try_recv() {
            Self::apply_annotation(
                update,
                &mut self.store,
                &self.selection,
                &mut self.provider,
            );
            changed = true;
        }

        if changed {
            self.request_redraw();
        }

        self.watchdog.poll(self.provider.is_ready())
    }

    fn apply_annotation(
        update: AnnotationUpdate,
        store: &mut MarkerStore,
        selection: &SelectionController,
        provider: &mut P,
    ) {
        let text = match update.result {
            Ok(summary) => summary,
            // The failure was already logged by the fetch task; all that is
            // left of it is the fallback text in the popup.
            Err(_) => FALLBACK_ANNOTATION.to_string(),
        };

        if store.annotate(update.marker_id, text).is_ok() {
            selection.refresh_popup(update.marker_id, store, provider);
        }
    }

    /// The markers visible under the current search query, in display order.
    ///
    /// This is what the host renders as the place list.
    pub fn visible_markers(&self) -> Vec<(MarkerId, &Marker)> {
        visible_subset(&self.store, self.search.query())
            .into_iter()
            .filter_map(|id| self.store.get(id).map(|marker| (id, marker)))
            .collect()
    }

    /// The marker registry.
    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    /// Current search query.
    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    /// The currently active marker, if any.
    pub fn active_marker(&self) -> Option<MarkerId> {
        self.selection.active()
    }

    /// Navigation drawer state.
    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    /// Load state of the map widget as of the last [`Viewer::tick`].
    pub fn load_state(&self) -> MapLoadState {
        self.watchdog.state()
    }

    /// The map provider the viewer is bound to.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the map provider.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    fn resync(&mut self) {
        let visible = visible_subset(&self.store, self.search.query());
        self.binder
            .sync(&visible, &mut self.store, &mut self.provider);
    }

    fn request_redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw();
        }
    }

    #[cfg(test)]
    pub(crate) fn inject_annotation(&mut self, update: AnnotationUpdate) {
        Self::apply_annotation(
            update,
            &mut self.store,
            &self.selection,
            &mut self.provider,
        );
    }
}
