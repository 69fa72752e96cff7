//! Geographic points and great-circle distance.
//!
//! Coordinates are WGS84 degrees.

/// Mean Earth radius, in kilometres, used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// An immutable latitude/longitude pair.
///
/// No range validation is performed. Out-of-range values flow through the
/// distance computation unchanged.
///
/// # Examples
/// ```
/// use tiered_route_core::GeoPoint;
///
/// let depot = GeoPoint::new(-33.518, -70.71749);
/// assert_eq!(depot.latitude, -33.518);
/// assert_eq!(depot.distance_km(depot), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, nominally within `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, nominally within `[-180, 180]`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// Shorthand for [`distance_km`].
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        distance_km(self, other)
    }
}

/// Haversine distance between `a` and `b` in kilometres.
///
/// Uses a spherical Earth of radius [`EARTH_RADIUS_KM`]. The result is
/// symmetric and zero for identical points. Malformed input (for example
/// NaN coordinates) yields NaN rather than an error.
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, distance_km};
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(0.0, 1.0);
/// let d = distance_km(a, b);
/// assert!((d - 111.19).abs() < 0.01);
/// assert!((d - distance_km(b, a)).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine formula is inherently floating-point"
)]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
