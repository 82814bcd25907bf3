//! Shared fixtures, written as `geo` geometries and encoded to WKB.

mod array;
mod linestring;

pub(crate) use array::mixed_array;
pub(crate) use linestring::{linestring, multilinestring};
pub(crate) use point::{geometrycollection, multipoint, point_wkb};
pub(crate) use polygon::{bowtie, clockwise_square, multipolygon, polygon_with_hole};

use geo::Geometry;
use geozero::{CoordDimensions, ToWkb};

pub(crate) fn to_wkb(geom: impl Into<Geometry>) -> Vec<u8> {
    let geom: Geometry = geom.into();
    geom.to_wkb(CoordDimensions::xy()).unwrap()
}
