//! Geographic primitives used by the viewer.
//!
//! The viewer does not do any projection math of its own. Coordinates are
//! WGS84 degrees throughout, and the only derived value is the rectangular
//! extent the map widget is asked to fit its viewport to.

use serde::{Deserialize, Serialize};

/// 2d point on the surface of the Earth, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude values (in degrees).
    pub const fn latlng(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Creates a new [`GeoPoint`](crate::geo::GeoPoint) from latitude and longitude values (in
/// degrees).
///
/// ```
/// use ortelius::latlng;
///
/// let point = latlng!(40.7713024, -73.9632393);
/// assert_eq!(point.lat(), 40.7713024);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        $crate::geo::GeoPoint::latlng($lat, $lng)
    };
}

/// Rectangular geographic extent bounding a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLngBounds {
    /// Southern edge latitude.
    pub south: f64,
    /// Western edge longitude.
    pub west: f64,
    /// Northern edge latitude.
    pub north: f64,
    /// Eastern edge longitude.
    pub east: f64,
}

impl LatLngBounds {
    /// Creates a degenerate extent containing only the given point.
    pub fn from_point(point: &GeoPoint) -> Self {
        Self {
            south: point.lat(),
            west: point.lng(),
            north: point.lat(),
            east: point.lng(),
        }
    }

    /// Creates the smallest extent containing all of the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a GeoPoint>) -> Option<Self> {
        let first = points.next()?;
        let mut bounds = Self::from_point(first);
        for point in points {
            bounds.extend(point);
        }

        Some(bounds)
    }

    /// Grows the extent to contain the given point.
    pub fn extend(&mut self, point: &GeoPoint) {
        if point.lat() < self.south {
            self.south = point.lat();
        }
        if point.lat() > self.north {
            self.north = point.lat();
        }
        if point.lng() < self.west {
            self.west = point.lng();
        }
        if point.lng() > self.east {
            self.east = point.lng();
        }
    }

    /// Returns the smallest extent containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            south: if self.south < other.south {
                self.south
            } else {
                other.south
            },
            west: if self.west < other.west {
                self.west
            } else {
                other.west
            },
            north: if self.north > other.north {
                self.north
            } else {
                other.north
            },
            east: if self.east > other.east {
                self.east
            } else {
                other.east
            },
        }
    }

    /// Returns true if the point lies inside the extent (edges included).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.south <= point.lat()
            && self.north >= point.lat()
            && self.west <= point.lng()
            && self.east >= point.lng()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_points_of_empty_iterator_is_none() {
        assert!(LatLngBounds::from_points(std::iter::empty::<&GeoPoint>()).is_none());
    }

    #[test]
    fn from_points_bounds_all_points() {
        let points = [
            latlng!(40.7713024, -73.9632393),
            latlng!(40.7444883, -73.9949465),
            latlng!(40.7281777, -73.984377),
        ];

        let bounds = LatLngBounds::from_points(points.iter()).expect("points are not empty");

        assert_relative_eq!(bounds.south, 40.7281777);
        assert_relative_eq!(bounds.north, 40.7713024);
        assert_relative_eq!(bounds.west, -73.9949465);
        assert_relative_eq!(bounds.east, -73.9632393);

        for point in &points {
            assert!(bounds.contains(point));
        }
    }

    #[test]
    fn extend_is_noop_for_contained_point() {
        let mut bounds = LatLngBounds::from_point(&latlng!(10.0, 10.0));
        bounds.extend(&latlng!(20.0, 20.0));

        let before = bounds;
        bounds.extend(&latlng!(15.0, 15.0));

        assert_eq!(bounds, before);
    }

    #[test]
    fn merge_covers_both_extents() {
        let a = LatLngBounds::from_point(&latlng!(0.0, 0.0));
        let b = LatLngBounds::from_point(&latlng!(5.0, -5.0));

        let merged = a.merge(b);

        assert!(merged.contains(&latlng!(0.0, 0.0)));
        assert!(merged.contains(&latlng!(5.0, -5.0)));
        assert!(merged.contains(&latlng!(2.5, -2.5)));
    }
}
