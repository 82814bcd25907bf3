use arrow_array::builder::Float64Builder;
use arrow_array::Float64Array;

use crate::array::GeographyArray;
use crate::error::Result;
use crate::geography::{Geography, GeographyTrait};

/// Coordinates of single-point geographies.
pub trait Coordinates {
    type Output;

    /// Longitude in degrees. Null for missing geographies and for point sets without exactly
    /// one point; an error for any other kind of geography.
    fn x(&self) -> Self::Output;

    /// Latitude in degrees, with the same rules as [`x`][Self::x].
    fn y(&self) -> Self::Output;
}

fn try_map_float(
    arr: &GeographyArray,
    f: impl Fn(&Geography) -> Result<Option<f64>>,
) -> Result<Float64Array> {
    let mut output_array = Float64Builder::with_capacity(arr.len());
    for maybe_g in arr.iter() {
        match maybe_g {
            Some(g) => output_array.append_option(f(g)?),
            None => output_array.append_null(),
        }
    }
    Ok(output_array.finish())
}

impl Coordinates for GeographyArray {
    type Output = Result<Float64Array>;

    fn x(&self) -> Self::Output {
        try_map_float(self, |g| g.x())
    }

    fn y(&self) -> Self::Output {
        try_map_float(self, |g| g.y())
    }
}
