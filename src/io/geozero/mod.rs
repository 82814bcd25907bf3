//! Interoperability with the [`geozero`] crate.
//!
//! Geographies are read through the builders in [`builder`], which consume geozero events, and
//! written by implementing [`GeozeroGeometry`][::geozero::GeozeroGeometry] so that any geozero
//! processor (WKB, WKT, GeoJSON, ...) can consume them.

mod api;
pub mod builder;
mod scalar;

pub use api::{read_wkb, write_wkb};
