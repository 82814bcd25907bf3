//! Geographies: immutable point, polyline and polygon values on the sphere.
//!
//! Every variant implements the same [`GeographyTrait`] capability set, so algorithms can work
//! on [`Geography`] without caring which kind they hold. Each geography owns a
//! [`LazyShapeIndex`] that is built the first time an edge query needs it.

mod point;
mod polygon;
mod polyline;

pub use point::PointGeography;
pub use polygon::PolygonGeography;
pub use polyline::PolylineGeography;

use crate::error::Result;
use crate::index::{LazyShapeIndex, MutableShapeIndex, ShapeId};

/// The capabilities shared by every geography.
pub trait GeographyTrait {
    /// Whether the geography has more than one disjoint part.
    fn is_collection(&self) -> bool;

    /// 0 for points, 1 for curves, 2 for areas.
    fn dimension(&self) -> usize;

    /// Number of vertices.
    fn num_points(&self) -> usize;

    /// Area in steradians.
    fn area(&self) -> f64;

    /// Length in radians.
    fn length(&self) -> f64;

    /// Perimeter in radians.
    fn perimeter(&self) -> f64;

    /// Longitude in degrees of a geography made of exactly one point, `None` for any other
    /// number of points. Fails for geographies that are not points.
    fn x(&self) -> Result<Option<f64>>;

    /// Latitude in degrees, with the same rules as [`x`][Self::x].
    fn y(&self) -> Result<Option<f64>>;

    fn centroid(&self) -> Result<Geography>;

    fn boundary(&self) -> Result<Geography>;

    /// Add this geography's shapes to `index`, returning the ids they were given.
    fn build_shape_index(&self, index: &mut MutableShapeIndex) -> Vec<ShapeId>;

    fn lazy_index(&self) -> &LazyShapeIndex;

    /// The geography's own index, built by [`build_shape_index`][Self::build_shape_index] on
    /// first access.
    fn shape_index(&self) -> &MutableShapeIndex {
        self.lazy_index().get_or_build(|index| {
            self.build_shape_index(index);
        })
    }
}

/// One geography of any kind.
#[derive(Debug, Clone)]
pub enum Geography {
    Point(PointGeography),
    Polyline(PolylineGeography),
    Polygon(PolygonGeography),
}

impl Geography {
    pub fn as_point(&self) -> Option<&PointGeography> {
        match self {
            Geography::Point(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&PolylineGeography> {
        match self {
            Geography::Polyline(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonGeography> {
        match self {
            Geography::Polygon(g) => Some(g),
            _ => None,
        }
    }
}

macro_rules! geography_delegate_impl {
    ($(fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty;)+) => {
        $(
            fn $name(&self $(, $arg: $ty)*) -> $ret {
                match self {
                    Geography::Point(g) => g.$name($($arg),*),
                    Geography::Polyline(g) => g.$name($($arg),*),
                    Geography::Polygon(g) => g.$name($($arg),*),
                }
            }
        )+
    };
}

impl GeographyTrait for Geography {
    geography_delegate_impl! {
        fn is_collection(&self) -> bool;
        fn dimension(&self) -> usize;
        fn num_points(&self) -> usize;
        fn area(&self) -> f64;
        fn length(&self) -> f64;
        fn perimeter(&self) -> f64;
        fn x(&self) -> Result<Option<f64>>;
        fn y(&self) -> Result<Option<f64>>;
        fn centroid(&self) -> Result<Geography>;
        fn boundary(&self) -> Result<Geography>;
        fn build_shape_index(&self, index: &mut MutableShapeIndex) -> Vec<ShapeId>;
        fn lazy_index(&self) -> &LazyShapeIndex;
    }
}

impl From<PointGeography> for Geography {
    fn from(value: PointGeography) -> Self {
        Geography::Point(value)
    }
}

impl From<PolylineGeography> for Geography {
    fn from(value: PolylineGeography) -> Self {
        Geography::Polyline(value)
    }
}

impl From<PolygonGeography> for Geography {
    fn from(value: PolygonGeography) -> Self {
        Geography::Polygon(value)
    }
}
