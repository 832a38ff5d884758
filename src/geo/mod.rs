//! Geodetic distance and the local flat-earth projection used to place stops on a plane.

mod haversine;
mod projection;

pub use haversine::{HaversineDistance, EARTH_RADIUS_MILES};
pub use projection::{Anchor, GeoCoordinate, PlanarPoint, Projector};
pub(crate) use projection::sq_dist;
