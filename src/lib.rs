//! Spherical geographies (points, polylines and polygons on the unit sphere), each with a
//! lazily-built edge index, plus vectorized operators over collections of them: nearest feature
//! lookup and pairwise minimum and maximum distance matrices.
//!
//! Geographies are read from and written to WKB through [`geozero`], with coordinates as
//! `(longitude, latitude)` in degrees. Distances are angles in radians and areas are in
//! steradians.
//!
//! ```
//! use s2geography::algorithm::{closest_feature, distance_matrix};
//! use s2geography::array::GeographyArray;
//! use s2geography::geography::{Geography, PointGeography};
//! use s2geography::s2::point_from_degrees;
//!
//! let point = |lng, lat| Some(Geography::from(PointGeography::from_point(point_from_degrees(lng, lat))));
//! let a: GeographyArray = vec![point(0.0, 0.0)].into();
//! let b: GeographyArray = vec![point(0.0, 0.0), point(10.0, 10.0)].into();
//!
//! assert_eq!(closest_feature(&a, &b).unwrap().value(0), 1);
//! assert_eq!(distance_matrix(&a, &b).get(0, 0), Some(0.0));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod array;
pub mod error;
pub mod geography;
pub mod index;
pub mod io;
pub mod s2;
#[cfg(test)]
pub(crate) mod test;

pub use array::GeographyArray;
pub use geography::{Geography, GeographyTrait};
