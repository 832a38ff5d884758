//! Utilities to walk the partition structure of a KDTree.

use geo_traits::{
    GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection, UnimplementedLine,
    UnimplementedLineString, UnimplementedMultiLineString, UnimplementedMultiPoint,
    UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon, UnimplementedTriangle,
};

use crate::geo::PlanarPoint;
use crate::kdtree::{Axis, KDTree, Node};

/// An axis-aligned region of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Lower-left corner.
    pub min: PlanarPoint,
    /// Upper-right corner.
    pub max: PlanarPoint,
}

impl Region {
    /// Create a region from two opposite corners, in any order.
    pub fn new(a: PlanarPoint, b: PlanarPoint) -> Self {
        Self {
            min: PlanarPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: PlanarPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Cut this region at `value` on `axis`, returning the lower and upper parts.
    fn split(&self, axis: Axis, value: f64) -> (Region, Region) {
        let mut lower = *self;
        let mut upper = *self;
        match axis {
            Axis::X => {
                lower.max.x = value;
                upper.min.x = value;
            }
            Axis::Y => {
                lower.max.y = value;
                upper.min.y = value;
            }
        }
        (lower, upper)
    }
}

impl GeometryTrait for Region {
    type T = f64;
    type PointType<'a>
        = UnimplementedPoint<f64>
    where
        Self: 'a;
    type LineStringType<'a>
        = UnimplementedLineString<f64>
    where
        Self: 'a;
    type PolygonType<'a>
        = UnimplementedPolygon<f64>
    where
        Self: 'a;
    type MultiPointType<'a>
        = UnimplementedMultiPoint<f64>
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = UnimplementedMultiLineString<f64>
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = UnimplementedMultiPolygon<f64>
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = UnimplementedGeometryCollection<f64>
    where
        Self: 'a;
    type RectType<'a>
        = Region
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<f64>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<f64>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        UnimplementedPoint<f64>,
        UnimplementedLineString<f64>,
        UnimplementedPolygon<f64>,
        UnimplementedMultiPoint<f64>,
        UnimplementedMultiLineString<f64>,
        UnimplementedMultiPolygon<f64>,
        UnimplementedGeometryCollection<f64>,
        Region,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        GeometryType::Rect(self)
    }
}

impl RectTrait for Region {
    type CoordType<'a>
        = PlanarPoint
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.min
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.max
    }
}

/// The segment along which an internal node divides its region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLine {
    /// Depth of the node that owns this split.
    pub depth: usize,
    /// Axis the node splits on. An `X` split is a vertical line.
    pub axis: Axis,
    /// Split value on `axis`.
    pub value: f64,
    /// One end of the segment, on the region's lower edge of the other axis.
    pub start: PlanarPoint,
    /// The other end, on the region's upper edge of the other axis.
    pub end: PlanarPoint,
}

impl<T> KDTree<T> {
    /// Every split of the tree as a segment clipped to its node's region, in pre-order.
    ///
    /// `extent` is the region assigned to the root. Subtrees without items produce no lines.
    pub fn partitions(&self, extent: Region) -> Vec<SplitLine> {
        let mut lines = vec![];
        collect_splits(&self.root, extent, &mut lines);
        lines
    }
}

fn collect_splits<T>(node: &Node<T>, region: Region, lines: &mut Vec<SplitLine>) {
    let (Some(value), Some((left, right))) = (node.split_value(), node.children()) else {
        return;
    };

    let axis = node.axis();
    let (start, end) = match axis {
        Axis::X => (
            PlanarPoint::new(value, region.min.y),
            PlanarPoint::new(value, region.max.y),
        ),
        Axis::Y => (
            PlanarPoint::new(region.min.x, value),
            PlanarPoint::new(region.max.x, value),
        ),
    };
    lines.push(SplitLine {
        depth: node.depth(),
        axis,
        value,
        start,
        end,
    });

    let (lower, upper) = region.split(axis, value);
    collect_splits(left, lower, lines);
    collect_splits(right, upper, lines);
}
