use arrow_array::builder::{BooleanBuilder, Int32Builder};
use arrow_array::{BooleanArray, Int32Array};

use crate::array::GeographyArray;
use crate::geography::{Geography, GeographyTrait};

/// Operate on the structure of geographies.
pub trait HasDimensions {
    type BooleanOutput;
    type IntegerOutput;

    /// Whether each geography has more than one part: several points, several polylines or
    /// several polygon shells.
    fn is_collection(&self) -> Self::BooleanOutput;

    /// 0 for points, 1 for polylines and 2 for polygons.
    fn dimension(&self) -> Self::IntegerOutput;

    /// The number of vertices of each geography.
    fn num_points(&self) -> Self::IntegerOutput;
}

fn map_int(arr: &GeographyArray, f: impl Fn(&Geography) -> usize) -> Int32Array {
    let mut output_array = Int32Builder::with_capacity(arr.len());
    arr.iter()
        .for_each(|maybe_g| output_array.append_option(maybe_g.map(|g| f(g) as i32)));
    output_array.finish()
}

impl HasDimensions for GeographyArray {
    type BooleanOutput = BooleanArray;
    type IntegerOutput = Int32Array;

    fn is_collection(&self) -> Self::BooleanOutput {
        let mut output_array = BooleanBuilder::with_capacity(self.len());
        self.iter()
            .for_each(|maybe_g| output_array.append_option(maybe_g.map(|g| g.is_collection())));
        output_array.finish()
    }

    fn dimension(&self) -> Self::IntegerOutput {
        map_int(self, |g| g.dimension())
    }

    fn num_points(&self) -> Self::IntegerOutput {
        map_int(self, |g| g.num_points())
    }
}
