//! A fixed-depth, median-split K-D Tree over projected points.
//!
//! The tree alternates its split axis by depth (x at even depths, y at odd depths) and stops at
//! a fixed depth regardless of how many items it holds, so every leaf bucket sits at exactly
//! `max_depth` and queries recurse at most that deep.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::{KDTreeBuilder, DEFAULT_MAX_DEPTH};
pub use index::{Axis, IndexedItem, KDTree, Node};
pub use r#trait::KDTreeIndex;
pub use traversal::{Region, SplitLine};
