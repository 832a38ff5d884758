use geo_traits::{CoordTrait, RectTrait};

use crate::geo::{sq_dist, PlanarPoint};
use crate::kdtree::{Axis, IndexedItem, KDTree, Node};

/// A trait for searching and accessing data out of a KDTree.
///
/// Implemented for the whole tree and for any of its subtrees.
pub trait KDTreeIndex<T>: Sized {
    /// The node queries start from.
    fn root(&self) -> &Node<T>;

    /// Search the index for items within a rectangle.
    ///
    /// - x_range: bounds on x, in either order
    /// - y_range: bounds on y, in either order
    ///
    /// Both bounds are inclusive. Returns matching items, left subtrees before right ones.
    fn range(&self, x_range: (f64, f64), y_range: (f64, f64)) -> Vec<&IndexedItem<T>> {
        let bounds = Bounds {
            min_x: x_range.0.min(x_range.1),
            max_x: x_range.0.max(x_range.1),
            min_y: y_range.0.min(y_range.1),
            max_y: y_range.0.max(y_range.1),
        };

        let mut result = vec![];
        range_node(self.root(), &bounds, &mut result);
        result
    }

    /// Search the index for items within a given bounding box.
    fn range_rect(&self, rect: &impl RectTrait<T = f64>) -> Vec<&IndexedItem<T>> {
        self.range(
            (rect.min().x(), rect.max().x()),
            (rect.min().y(), rect.max().y()),
        )
    }

    /// Search the index for items within a rectangle.
    ///
    /// Returns ids of found items
    fn range_ids(&self, x_range: (f64, f64), y_range: (f64, f64)) -> Vec<u32> {
        self.range(x_range, y_range)
            .into_iter()
            .map(|item| item.id)
            .collect()
    }

    /// Search the index for items within a given radius.
    ///
    /// - center: query point
    /// - r: radius
    ///
    /// Points exactly on the circle are included.
    fn within(&self, center: PlanarPoint, r: f64) -> Vec<&IndexedItem<T>> {
        let r2 = r * r;
        let mut candidates = self.range((center.x - r, center.x + r), (center.y - r, center.y + r));
        candidates.retain(|item| sq_dist(item.point.x, item.point.y, center.x, center.y) <= r2);
        candidates
    }

    /// Search the index for items within a given radius of a coordinate.
    fn within_coord(&self, coord: &impl CoordTrait<T = f64>, r: f64) -> Vec<&IndexedItem<T>> {
        self.within(PlanarPoint::new(coord.x(), coord.y()), r)
    }

    /// Search the index for items within a given radius.
    ///
    /// Returns ids of found items
    fn within_ids(&self, center: PlanarPoint, r: f64) -> Vec<u32> {
        self.within(center, r)
            .into_iter()
            .map(|item| item.id)
            .collect()
    }
}

impl<T> KDTreeIndex<T> for KDTree<T> {
    fn root(&self) -> &Node<T> {
        &self.root
    }
}

impl<T> KDTreeIndex<T> for Node<T> {
    fn root(&self) -> &Node<T> {
        self
    }
}

struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    #[inline]
    fn contains(&self, p: &PlanarPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    #[inline]
    fn on(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }
}

fn range_node<'a, T>(node: &'a Node<T>, bounds: &Bounds, result: &mut Vec<&'a IndexedItem<T>>) {
    match node {
        Node::Leaf { bucket, .. } => {
            result.extend(bucket.iter().filter(|item| bounds.contains(&item.point)));
        }
        Node::Internal {
            depth,
            split,
            left,
            right,
        } => {
            let (min, max) = bounds.on(Axis::at_depth(*depth));
            // ties with the split value may land on either side, so both tests are inclusive
            if *split >= min {
                range_node(left, bounds, result);
            }
            if *split <= max {
                range_node(right, bounds, result);
            }
        }
    }
}
