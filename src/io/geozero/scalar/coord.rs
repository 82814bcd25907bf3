use geozero::GeomProcessor;

use crate::s2::{LatLng, S2Point};

/// Emit a unit vector as a `(longitude, latitude)` coordinate in degrees.
pub(crate) fn process_coord<P: GeomProcessor>(
    point: &S2Point,
    coord_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let ll = LatLng::from_point(point);
    processor.xy(ll.lng_degrees(), ll.lat_degrees(), coord_idx)
}
