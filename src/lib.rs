#![doc = include_str!("../README.md")]

mod error;
pub mod geo;
pub mod kdtree;

pub use error::{Result, StopIndexError};
pub use geo::{Anchor, GeoCoordinate, PlanarPoint, Projector};
pub use kdtree::{IndexedItem, KDTree, KDTreeBuilder, KDTreeIndex};
