use crate::array::GeographyArray;
use crate::error::Result;
use crate::geography::GeographyTrait;

/// The boundary of each geography, one dimension lower: nothing for points, unmatched endpoints
/// for polylines and closed rings for polygons.
pub trait Boundary {
    type Output;

    fn boundary(&self) -> Self::Output;
}

impl Boundary for GeographyArray {
    type Output = Result<GeographyArray>;

    fn boundary(&self) -> Self::Output {
        self.iter()
            .map(|maybe_g| maybe_g.map(|g| g.boundary()).transpose())
            .collect::<Result<Vec<_>>>()
            .map(GeographyArray::new)
    }
}
