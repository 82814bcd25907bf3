//! Conversion between geographies and other representations: geozero event streams and
//! Well-Known Binary.

pub mod geozero;
pub mod wkb;
