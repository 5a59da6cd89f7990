use std::sync::Arc;
use std::time::Duration;

use crate::annotation::{self, AnnotationProvider, OpensearchProvider};
use crate::geo::GeoPoint;
use crate::marker::MarkerStore;
use crate::messenger::Messenger;
use crate::place::{self, Place};
use crate::provider::MapProvider;
use crate::watchdog::{LoadWatchdog, DEFAULT_LOAD_TIMEOUT};

use super::Viewer;

const DEFAULT_CENTER: GeoPoint = GeoPoint::latlng(40.7413549, -73.9980244);
const DEFAULT_ZOOM: u32 = 13;

/// Convenience type to initialize a [`Viewer`].
///
/// ```no_run
/// use ortelius::{NullMapProvider, ViewerBuilder};
///
/// # tokio_test::block_on(async {
/// let viewer = ViewerBuilder::default().build(NullMapProvider);
/// assert_eq!(viewer.store().len(), 5);
/// # });
/// ```
///
/// On native targets `build` must be called within an async runtime, as it
/// spawns the annotation fetch tasks.
#[derive(Default)]
pub struct ViewerBuilder {
    places: Option<Vec<Place>>,
    center: Option<GeoPoint>,
    zoom: Option<u32>,
    annotation_provider: Option<Arc<dyn AnnotationProvider>>,
    load_timeout: Option<Duration>,
    messenger: Option<Box<dyn Messenger>>,
}

impl ViewerBuilder {
    /// Sets the seed places. One marker is created per place, in the given
    /// order.
    ///
    /// Defaults to [`place::defaults()`](crate::place::defaults).
    pub fn with_places(mut self, places: Vec<Place>) -> Self {
        self.places = Some(places);
        self
    }

    /// Sets the initial center of the map surface.
    pub fn with_center(mut self, center: GeoPoint) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets the initial zoom level of the map surface.
    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Sets the annotation source. Defaults to the English Wikipedia
    /// [`OpensearchProvider`].
    pub fn with_annotation_provider(
        mut self,
        provider: impl AnnotationProvider + 'static,
    ) -> Self {
        self.annotation_provider = Some(Arc::new(provider));
        self
    }

    /// Sets how long the map widget is given to load before the viewer
    /// reports failure. Defaults to
    /// [`DEFAULT_LOAD_TIMEOUT`](crate::watchdog::DEFAULT_LOAD_TIMEOUT).
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = Some(timeout);
        self
    }

    /// Sets a [`Messenger`] the viewer notifies after every state change.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Consumes the builder and creates a viewer bound to the given map
    /// provider.
    ///
    /// Initializes the map surface, places and shows every marker, fits the
    /// viewport around them, arms the load watchdog and fires one annotation
    /// fetch per marker.
    pub fn build<P: MapProvider>(self, mut provider: P) -> Viewer<P> {
        let ViewerBuilder {
            places,
            center,
            zoom,
            annotation_provider,
            load_timeout,
            messenger,
        } = self;

        let places = places.unwrap_or_else(place::defaults);
        let annotation_provider: Arc<dyn AnnotationProvider> =
            annotation_provider.unwrap_or_else(|| Arc::new(OpensearchProvider::new()));

        provider.init_surface(
            center.unwrap_or(DEFAULT_CENTER),
            zoom.unwrap_or(DEFAULT_ZOOM),
        );

        let store = MarkerStore::new(&places);
        let (sender, receiver) = annotation::channel();
        for (id, marker) in store.iter() {
            annotation::spawn_fetch(
                annotation_provider.clone(),
                id,
                marker.title().to_string(),
                sender.clone(),
            );
        }

        let watchdog = LoadWatchdog::new(load_timeout.unwrap_or(DEFAULT_LOAD_TIMEOUT));

        Viewer::new(store, provider, receiver, watchdog, messenger)
    }
}
