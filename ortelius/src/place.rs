//! Static seed data for the viewer.
//!
//! A [`Place`] is the immutable record a marker is created from. The set of
//! places is fixed at startup: it either comes from [`defaults`] or is parsed
//! from a JSON configuration list with [`from_json`].

use serde::{Deserialize, Serialize};

use crate::error::OrteliusError;
use crate::geo::GeoPoint;

/// Static seed record for a point of interest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Place {
    title: String,
    location: GeoPoint,
}

impl Place {
    /// Creates a new place.
    pub fn new(title: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            title: title.into(),
            location,
        }
    }

    /// Display name of the place. Also the search term used to annotate it.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Position of the place.
    pub fn location(&self) -> GeoPoint {
        self.location
    }
}

/// The built-in seed list: a handful of Manhattan points of interest.
pub fn defaults() -> Vec<Place> {
    vec![
        Place::new("Park Avenue", crate::latlng!(40.7713024, -73.9632393)),
        Place::new("Starbucks", crate::latlng!(40.7444883, -73.9949465)),
        Place::new(
            "East Village Hip Studio",
            crate::latlng!(40.7281777, -73.984377),
        ),
        Place::new(
            "TriBeCa Artsy Bachelor Pad",
            crate::latlng!(40.7195264, -74.0089934),
        ),
        Place::new(
            "Starry Night Pavilion",
            crate::latlng!(40.7347062, -73.9895759),
        ),
    ]
}

/// Parses a seed list from a JSON array.
///
/// The expected shape is the same one [`defaults`] serializes to:
///
/// ```json
/// [{"title": "Park Avenue", "location": {"lat": 40.7713024, "lng": -73.9632393}}]
/// ```
pub fn from_json(json: &str) -> Result<Vec<Place>, OrteliusError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_keep_configuration_order() {
        let places = defaults();

        assert_eq!(places.len(), 5);
        assert_eq!(places[0].title(), "Park Avenue");
        assert_eq!(places[1].title(), "Starbucks");
    }

    #[test]
    fn from_json_round_trips_defaults() {
        let json = serde_json::to_string(&defaults()).expect("defaults are serializable");
        let parsed = from_json(&json).expect("serialized defaults parse back");

        assert_eq!(parsed, defaults());
    }

    #[test]
    fn from_json_rejects_wrong_shape() {
        assert_matches!(
            from_json(r#"{"title": "not an array"}"#),
            Err(OrteliusError::MalformedResponse)
        );
    }
}
