use crate::geo::PlanarPoint;
use crate::kdtree::{Axis, IndexedItem, KDTree, Node};

/// Depth of the leaf buckets when no other depth is requested.
pub const DEFAULT_MAX_DEPTH: usize = 6;

const MAX_SUPPORTED_DEPTH: usize = 20;

/// A builder to create a [`KDTree`].
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<T> {
    items: Vec<IndexedItem<T>>,
    max_depth: usize,
}

impl<T> Default for KDTreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KDTreeBuilder<T> {
    /// Create a new builder with the default max depth.
    pub fn new() -> Self {
        Self::new_with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create a new builder whose leaf buckets sit at `max_depth`.
    pub fn new_with_max_depth(max_depth: usize) -> Self {
        assert!(
            max_depth <= MAX_SUPPORTED_DEPTH,
            "max_depth {} exceeds {}",
            max_depth,
            MAX_SUPPORTED_DEPTH
        );
        Self {
            items: vec![],
            max_depth,
        }
    }

    /// Add an item to the index, returning its insertion position.
    pub fn add(&mut self, id: u32, point: PlanarPoint, payload: T) -> usize {
        self.add_item(IndexedItem::new(id, point, payload))
    }

    /// Add an already assembled item, returning its insertion position.
    pub fn add_item(&mut self, item: IndexedItem<T>) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Consume this builder, partitioning the items and generating a KDTree ready for queries.
    pub fn finish(self) -> KDTree<T> {
        let num_items = self.items.len();
        let root = build(self.items, 0, self.max_depth);
        finished(root, num_items, self.max_depth)
    }

    /// Like [`finish`][Self::finish], but builds sibling subtrees on the rayon thread pool.
    ///
    /// The resulting tree is identical to the sequential one.
    #[cfg(feature = "rayon")]
    pub fn par_finish(self) -> KDTree<T>
    where
        T: Send,
    {
        let num_items = self.items.len();
        let root = par_build(self.items, 0, self.max_depth);
        finished(root, num_items, self.max_depth)
    }
}

impl<T> Extend<IndexedItem<T>> for KDTreeBuilder<T> {
    fn extend<I: IntoIterator<Item = IndexedItem<T>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

fn finished<T>(root: Node<T>, num_items: usize, max_depth: usize) -> KDTree<T> {
    tracing::debug!(num_items, max_depth, "Built k-d tree");
    KDTree {
        root,
        num_items,
        max_depth,
    }
}

/// Stable-sort `items` on the axis for `depth` and cut them at the median.
///
/// Returns the split value (`NaN` for no items), the items before the median and the median
/// with everything after it.
fn partition<T>(
    mut items: Vec<IndexedItem<T>>,
    depth: usize,
) -> (f64, Vec<IndexedItem<T>>, Vec<IndexedItem<T>>) {
    let axis = Axis::at_depth(depth);
    items.sort_by(|a, b| axis.compare(&a.point, &b.point));

    let mid = items.len() / 2;
    let split = items
        .get(mid)
        .map_or(f64::NAN, |item| axis.value(&item.point));
    let right = items.split_off(mid);
    (split, items, right)
}

fn build<T>(items: Vec<IndexedItem<T>>, depth: usize, max_depth: usize) -> Node<T> {
    if depth == max_depth {
        return Node::Leaf {
            depth,
            bucket: items,
        };
    }

    let (split, left, right) = partition(items, depth);
    Node::Internal {
        depth,
        split,
        left: Box::new(build(left, depth + 1, max_depth)),
        right: Box::new(build(right, depth + 1, max_depth)),
    }
}

#[cfg(feature = "rayon")]
fn par_build<T: Send>(items: Vec<IndexedItem<T>>, depth: usize, max_depth: usize) -> Node<T> {
    if depth == max_depth {
        return Node::Leaf {
            depth,
            bucket: items,
        };
    }

    let (split, left, right) = partition(items, depth);
    let (left, right) = rayon::join(
        || par_build(left, depth + 1, max_depth),
        || par_build(right, depth + 1, max_depth),
    );
    Node::Internal {
        depth,
        split,
        left: Box::new(left),
        right: Box::new(right),
    }
}
