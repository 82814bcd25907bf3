use geozero::{GeomProcessor, GeozeroGeometry};

use crate::geography::Geography;
use crate::io::geozero::scalar::{
    process_point_geography, process_polygon_geography, process_polyline_geography,
};

pub(crate) fn process_geography<P: GeomProcessor>(
    geog: &Geography,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    match geog {
        Geography::Point(g) => process_point_geography(g, geom_idx, processor),
        Geography::Polyline(g) => process_polyline_geography(g, geom_idx, processor),
        Geography::Polygon(g) => process_polygon_geography(g, geom_idx, processor),
    }
}

impl GeozeroGeometry for Geography {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_geography(self, 0, processor)
    }
}
