//! Vectorized algorithms over [`GeographyArray`][crate::array::GeographyArray], returning Arrow
//! arrays.

pub mod boundary;
pub mod centroid;
pub mod closest_feature;
pub mod coordinates;
pub mod dimensions;
pub mod distance_matrix;
pub mod measures;

pub use boundary::Boundary;
pub use centroid::Centroid;
pub use closest_feature::closest_feature;
pub use coordinates::Coordinates;
pub use dimensions::HasDimensions;
pub use distance_matrix::{distance_matrix, max_distance_matrix, DistanceMatrix};
pub use measures::Measures;
