use geozero::{GeomProcessor, GeozeroGeometry};

use crate::geography::PointGeography;
use crate::io::geozero::scalar::process_coord;

/// An empty geography is `POINT EMPTY`, a single point is a `POINT` and anything else is a
/// `MULTIPOINT`.
pub(crate) fn process_point_geography<P: GeomProcessor>(
    geog: &PointGeography,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    match geog.points() {
        [] => processor.empty_point(geom_idx)?,
        [point] => {
            processor.point_begin(geom_idx)?;
            process_coord(point, 0, processor)?;
            processor.point_end(geom_idx)?;
        }
        points => {
            // geozero does not call point_begin/point_end for the points of a MultiPoint
            processor.multipoint_begin(points.len(), geom_idx)?;
            for (coord_idx, point) in points.iter().enumerate() {
                process_coord(point, coord_idx, processor)?;
            }
            processor.multipoint_end(geom_idx)?;
        }
    }
    Ok(())
}

impl GeozeroGeometry for PointGeography {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_point_geography(self, 0, processor)
    }
}
