//! Reading and writing arrays of Well-Known Binary geometries.

mod api;

pub use api::{from_wkb, to_wkb};
