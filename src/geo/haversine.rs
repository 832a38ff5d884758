//! Great-circle distance on a spherical earth.

use crate::geo::GeoCoordinate;

/// Mean radius of the earth, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Haversine distance metric.
///
/// Calculates the great-circle distance between two points on a sphere. Inputs are in degrees
/// and are **not** validated: latitudes outside [-90, 90] or longitudes outside [-180, 180] give
/// an unspecified result. Use [`GeoCoordinate::try_new`] upstream to reject them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaversineDistance {
    /// Sphere radius; the output is in the same unit.
    pub earth_radius: f64,
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self {
            earth_radius: EARTH_RADIUS_MILES,
        }
    }
}

impl HaversineDistance {
    /// Create a new Haversine distance metric with custom sphere radius.
    pub fn with_radius(earth_radius: f64) -> Self {
        Self { earth_radius }
    }

    /// Distance between `a` and `b`.
    pub fn distance(&self, a: GeoCoordinate, b: GeoCoordinate) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = b.lon.to_radians() - a.lon.to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // rounding can push sqrt(h) just past 1 near antipodes, where asin is undefined
        let c = 2.0 * h.sqrt().min(1.0).asin();
        self.earth_radius * c
    }
}
