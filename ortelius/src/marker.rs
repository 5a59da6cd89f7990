//! Marker registry of the viewer.
//!
//! The [`MarkerStore`] owns one [`Marker`] per seed [`Place`] for the whole
//! lifetime of the viewer. Markers are created once, in seed order, and are
//! never removed; the store only mutates them: the annotation is written when
//! a fetch completes, and the highlight/hidden flags are toggled by the
//! selection controller and the view binder.

use crate::error::OrteliusError;
use crate::geo::GeoPoint;
use crate::place::Place;

/// Identifier of a marker within a [`MarkerStore`].
///
/// Ids are stable for the lifetime of the store because markers are never
/// removed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(usize);

impl MarkerId {
    /// Position of the marker in display order.
    pub fn index(&self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Runtime state of a single point of interest.
#[derive(Debug, Clone)]
pub struct Marker {
    title: String,
    location: GeoPoint,
    annotation: Option<String>,
    is_highlighted: bool,
}

impl Marker {
    fn new(place: &Place) -> Self {
        Self {
            title: place.title().to_string(),
            location: place.location(),
            annotation: None,
            is_highlighted: false,
        }
    }

    /// Display name of the marker.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Position of the marker.
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Description text fetched from the annotation service. `None` until the
    /// fetch for this marker completes.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Whether the marker is currently the highlighted ("active") one.
    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }
}

struct MarkerEntry {
    marker: Marker,
    is_hidden: bool,
}

/// Ordered collection of the viewer's markers.
///
/// The store is the sole mutator of marker state. All mutating operations
/// take a [`MarkerId`]; an id that does not exist in the store is a defect in
/// the caller, so it is logged and reported as
/// [`OrteliusError::OutOfRange`] instead of panicking.
#[derive(Default)]
pub struct MarkerStore {
    entries: Vec<MarkerEntry>,
}

impl MarkerStore {
    /// Creates a store with one marker per place, preserving the seed order
    /// as display order.
    pub fn new(places: &[Place]) -> Self {
        Self {
            entries: places
                .iter()
                .map(|place| MarkerEntry {
                    marker: Marker::new(place),
                    is_hidden: false,
                })
                .collect(),
        }
    }

    /// Number of markers in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no markers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the marker with the given id.
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.entries.get(id.0).map(|entry| &entry.marker)
    }

    /// Returns true if the marker is currently filtered out of the map.
    pub fn is_hidden(&self, id: MarkerId) -> bool {
        self.entries
            .get(id.0)
            .map(|entry| entry.is_hidden)
            .unwrap_or(false)
    }

    /// Iterates over all markers in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (MarkerId(index), &entry.marker))
    }

    /// Writes the annotation for the marker.
    ///
    /// Annotation completions arrive asynchronously, so the store must accept
    /// them whenever they land. A second write for the same marker overwrites
    /// the first.
    pub fn annotate(
        &mut self,
        id: MarkerId,
        text: impl Into<String>,
    ) -> Result<(), OrteliusError> {
        let entry = self.entry_mut(id)?;
        entry.marker.annotation = Some(text.into());
        Ok(())
    }

    /// Sets the highlight ("active") flag of the marker.
    pub fn set_highlighted(&mut self, id: MarkerId, highlighted: bool) -> Result<(), OrteliusError> {
        let entry = self.entry_mut(id)?;
        entry.marker.is_highlighted = highlighted;
        Ok(())
    }

    /// Sets the hidden flag of the marker. Hidden markers keep their place in
    /// the store but are not displayed on the map.
    pub fn set_hidden(&mut self, id: MarkerId, hidden: bool) -> Result<(), OrteliusError> {
        let entry = self.entry_mut(id)?;
        entry.is_hidden = hidden;
        Ok(())
    }

    fn entry_mut(&mut self, id: MarkerId) -> Result<&mut MarkerEntry, OrteliusError> {
        match self.entries.get_mut(id.0) {
            Some(entry) => Ok(entry),
            None => {
                log::warn!("marker id {} is out of range", id.0);
                Err(OrteliusError::OutOfRange(id.0))
            }
        }
    }
}
