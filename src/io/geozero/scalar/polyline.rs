use geozero::{GeomProcessor, GeozeroGeometry};

use crate::geography::PolylineGeography;
use crate::io::geozero::scalar::process_coord;
use crate::s2::Polyline;

fn process_polyline<P: GeomProcessor>(
    polyline: &Polyline,
    tagged: bool,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    processor.linestring_begin(tagged, polyline.num_vertices(), geom_idx)?;
    for (coord_idx, vertex) in polyline.vertices().iter().enumerate() {
        process_coord(vertex, coord_idx, processor)?;
    }
    processor.linestring_end(tagged, geom_idx)?;
    Ok(())
}

/// An empty geography is an empty `LINESTRING`, one polyline is a `LINESTRING` and more are a
/// `MULTILINESTRING`.
pub(crate) fn process_polyline_geography<P: GeomProcessor>(
    geog: &PolylineGeography,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    match geog.polylines() {
        [] => {
            processor.linestring_begin(true, 0, geom_idx)?;
            processor.linestring_end(true, geom_idx)?;
        }
        [polyline] => process_polyline(polyline, true, geom_idx, processor)?,
        polylines => {
            processor.multilinestring_begin(polylines.len(), geom_idx)?;
            for (line_idx, polyline) in polylines.iter().enumerate() {
                process_polyline(polyline, false, line_idx, processor)?;
            }
            processor.multilinestring_end(geom_idx)?;
        }
    }
    Ok(())
}

impl GeozeroGeometry for PolylineGeography {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_polyline_geography(self, 0, processor)
    }
}
