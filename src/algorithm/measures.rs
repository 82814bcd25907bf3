use arrow_array::builder::Float64Builder;
use arrow_array::Float64Array;

use crate::array::GeographyArray;
use crate::geography::{Geography, GeographyTrait};

/// Areas and lengths on the unit sphere.
///
/// Multiply areas by the squared radius and lengths by the radius to get values on a sphere of
/// that radius.
pub trait Measures {
    type Output;

    /// Area in steradians. Zero for points and polylines.
    fn area(&self) -> Self::Output;

    /// Length of polylines in radians. Zero for points and polygons.
    fn length(&self) -> Self::Output;

    /// Length of polygon boundaries in radians. Zero for points and polylines.
    fn perimeter(&self) -> Self::Output;
}

fn map_float(arr: &GeographyArray, f: impl Fn(&Geography) -> f64) -> Float64Array {
    let mut output_array = Float64Builder::with_capacity(arr.len());
    arr.iter()
        .for_each(|maybe_g| output_array.append_option(maybe_g.map(&f)));
    output_array.finish()
}

impl Measures for GeographyArray {
    type Output = Float64Array;

    fn area(&self) -> Self::Output {
        map_float(self, |g| g.area())
    }

    fn length(&self) -> Self::Output {
        map_float(self, |g| g.length())
    }

    fn perimeter(&self) -> Self::Output {
        map_float(self, |g| g.perimeter())
    }
}
