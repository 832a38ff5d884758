//! Local tangent-plane projection around a fixed anchor.
//!
//! Each axis is projected independently: `x` is the great-circle distance travelled along the
//! anchor's parallel to reach the target longitude, `y` the distance along the anchor's meridian
//! to reach the target latitude. Both are signed (west and south are negative) and in the unit of
//! the [`HaversineDistance`] radius, miles by default. The approximation degrades with distance
//! from the anchor, so it is only meant for points within a regional radius of it.

use std::fmt;

use geo_traits::CoordTrait;

use crate::error::{Result, StopIndexError};
use crate::geo::HaversineDistance;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    /// Create a coordinate without validating it.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(StopIndexError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(StopIndexError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }
}

/// The fixed reference coordinate that projects to the planar origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor(GeoCoordinate);

impl Anchor {
    /// Latitude of the default anchor (the Wisconsin State Capitol).
    pub const DEFAULT_LAT: f64 = 43.074683;
    /// Longitude of the default anchor.
    pub const DEFAULT_LON: f64 = -89.384261;

    pub fn new(coord: GeoCoordinate) -> Self {
        Self(coord)
    }

    pub fn coord(&self) -> GeoCoordinate {
        self.0
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self(GeoCoordinate::new(Self::DEFAULT_LAT, Self::DEFAULT_LON))
    }
}

/// A projected point, as offsets from the anchor.
///
/// Either produced by a [`Projector`] or created directly from raw offsets with
/// [`PlanarPoint::new`] (synthetic points, query centers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other` on the plane.
    pub fn distance(&self, other: &PlanarPoint) -> f64 {
        sq_dist(self.x, self.y, other.x, other.y).sqrt()
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location(xy=({:.2}, {:.2}))", self.x, self.y)
    }
}

impl CoordTrait for PlanarPoint {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// Projects geodetic coordinates onto the plane centered at an [`Anchor`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Projector {
    anchor: Anchor,
    metric: HaversineDistance,
}

impl Projector {
    /// Create a projector measuring in miles around `anchor`.
    pub fn new(anchor: Anchor) -> Self {
        Self::new_with_metric(anchor, HaversineDistance::default())
    }

    /// Create a projector with a custom distance metric, e.g. a different sphere radius.
    pub fn new_with_metric(anchor: Anchor, metric: HaversineDistance) -> Self {
        Self { anchor, metric }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Project `coord`. Inputs are not validated, see [`HaversineDistance`].
    pub fn project(&self, coord: GeoCoordinate) -> PlanarPoint {
        let anchor = self.anchor.coord();

        let mut x = self
            .metric
            .distance(anchor, GeoCoordinate::new(anchor.lat, coord.lon));
        let mut y = self
            .metric
            .distance(anchor, GeoCoordinate::new(coord.lat, anchor.lon));

        if coord.lon < anchor.lon {
            x = -x;
        }
        if coord.lat < anchor.lat {
            y = -y;
        }

        PlanarPoint { x, y }
    }

    /// The projection of the anchor itself, always the origin.
    pub fn project_anchor(&self) -> PlanarPoint {
        self.project(self.anchor.coord())
    }
}

#[inline]
pub(crate) fn sq_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
