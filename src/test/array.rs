use crate::array::GeographyArray;
use crate::io::geozero::read_wkb;
use crate::test::{linestring, point_wkb, polygon_with_hole};

/// A point, a linestring, a polygon with a hole and a missing slot.
pub(crate) fn mixed_array() -> GeographyArray {
    [
        Some(point_wkb(0.0, 0.0)),
        Some(linestring()),
        Some(polygon_with_hole()),
        None,
    ]
    .into_iter()
    .map(|maybe_wkb| maybe_wkb.map(|wkb| read_wkb(&wkb, &Default::default()).unwrap()))
    .collect()
}
