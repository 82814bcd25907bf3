//! Spherical primitives: points, edges, loops, polylines and polygons on the unit sphere.
//!
//! Only what the geographies and the edge queries need is implemented here. Coordinates enter
//! and leave as longitude/latitude degrees and are stored as unit vectors.

mod chord_angle;
pub mod edge;
mod latlng;
mod loops;
mod point;
mod polygon;
mod polyline;

pub use chord_angle::ChordAngle;
pub use latlng::{point_from_degrees, LatLng};
pub use loops::Loop;
pub use point::{det, S2Point};
pub use polygon::Polygon;
pub use polyline::Polyline;
