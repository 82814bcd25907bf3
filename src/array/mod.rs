//! Arrays of nullable geographies.

pub use geography::GeographyArray;

mod geography;
