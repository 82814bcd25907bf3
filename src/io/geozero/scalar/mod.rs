mod coord;
mod geography;
mod point;
mod polygon;
mod polyline;

pub(crate) use coord::process_coord;
pub(crate) use point::process_point_geography;
pub(crate) use polygon::process_polygon_geography;
pub(crate) use polyline::process_polyline_geography;
