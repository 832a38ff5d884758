use std::cmp::Ordering;

use crate::geo::PlanarPoint;
use crate::kdtree::KDTreeBuilder;

/// A record stored in the tree: an identifier, its planar location and an opaque payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedItem<T> {
    /// Caller-assigned identifier, e.g. a stop id.
    pub id: u32,
    /// Location used for partitioning and queries.
    pub point: PlanarPoint,
    /// Data carried alongside the location; never inspected by the tree.
    pub payload: T,
}

impl<T> IndexedItem<T> {
    /// Create a new item.
    pub fn new(id: u32, point: PlanarPoint, payload: T) -> Self {
        Self { id, point, payload }
    }
}

/// The coordinate an internal node splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Split on `x`; used at even depths.
    X,
    /// Split on `y`; used at odd depths.
    Y,
}

impl Axis {
    /// The split axis for a node at `depth`.
    #[inline]
    pub fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// The coordinate of `point` on this axis.
    #[inline]
    pub fn value(self, point: &PlanarPoint) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// Orders by coordinate value; `-0.0` and `0.0` compare equal.
    #[inline]
    pub(crate) fn compare(self, a: &PlanarPoint, b: &PlanarPoint) -> Ordering {
        (self.value(a) + 0.0).total_cmp(&(self.value(b) + 0.0))
    }
}

/// A node of the tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// A node above `max_depth`.
    Internal {
        /// Distance from the root.
        depth: usize,
        /// Coordinate of the median item on this depth's axis, or `NaN` when the subtree is
        /// empty. `NaN` fails both pruning tests, so queries never descend into it.
        split: f64,
        /// Items strictly before the median in sort order.
        left: Box<Node<T>>,
        /// The median item and everything after it.
        right: Box<Node<T>>,
    },
    /// A bucket at `max_depth`, holding items in the order they reached it.
    Leaf {
        /// Distance from the root; always the tree's `max_depth`.
        depth: usize,
        /// Items in this bucket.
        bucket: Vec<IndexedItem<T>>,
    },
}

impl<T> Node<T> {
    /// Distance from the root.
    pub fn depth(&self) -> usize {
        match self {
            Node::Internal { depth, .. } | Node::Leaf { depth, .. } => *depth,
        }
    }

    /// The axis this node splits on.
    pub fn axis(&self) -> Axis {
        Axis::at_depth(self.depth())
    }

    /// Returns `true` if this is a leaf bucket.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The split value of an internal node with at least one item below it.
    pub fn split_value(&self) -> Option<f64> {
        match self {
            Node::Internal { split, .. } if !split.is_nan() => Some(*split),
            _ => None,
        }
    }

    /// Left and right children of an internal node.
    pub fn children(&self) -> Option<(&Node<T>, &Node<T>)> {
        match self {
            Node::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
            Node::Leaf { .. } => None,
        }
    }

    /// Items of a leaf bucket.
    pub fn bucket(&self) -> Option<&[IndexedItem<T>]> {
        match self {
            Node::Leaf { bucket, .. } => Some(bucket.as_slice()),
            Node::Internal { .. } => None,
        }
    }

    /// Number of items in this subtree.
    pub fn len(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => left.len() + right.len(),
            Node::Leaf { bucket, .. } => bucket.len(),
        }
    }

    /// Returns `true` if no item lies in this subtree.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a [IndexedItem<T>]>) {
        match self {
            Node::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
            Node::Leaf { bucket, .. } => out.push(bucket.as_slice()),
        }
    }
}

/// An immutable K-D Tree built from a snapshot of items.
///
/// Usually this will be created via [`KDTreeBuilder`], or directly from a list of items with
/// [`KDTree::new`]. Once built it is read-only and can be shared across threads for querying.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<T> {
    pub(crate) root: Node<T>,
    pub(crate) num_items: usize,
    pub(crate) max_depth: usize,
}

impl<T> KDTree<T> {
    /// Build a tree of the default depth from `items`.
    pub fn new(items: Vec<IndexedItem<T>>) -> Self {
        let mut builder = KDTreeBuilder::new();
        builder.extend(items);
        builder.finish()
    }

    /// The number of items in this tree.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The depth at which leaf buckets sit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Leaf buckets, left to right.
    pub fn leaves(&self) -> Vec<&[IndexedItem<T>]> {
        let mut out = vec![];
        self.root.collect_leaves(&mut out);
        out
    }
}
