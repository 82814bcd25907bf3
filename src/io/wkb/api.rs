use arrow_array::builder::GenericBinaryBuilder;
use arrow_array::{Array, GenericBinaryArray, OffsetSizeTrait};

use crate::array::GeographyArray;
use crate::error::Result;
use crate::io::geozero::builder::{GeographyBuilder, GeographyBuilderTrait, PolygonBuilderOptions};
use crate::io::geozero::write_wkb;

/// Parse a binary array of WKB geometries into a [`GeographyArray`]. Null slots stay null.
///
/// Parsing stops at the first geometry that can't be converted.
pub fn from_wkb<O: OffsetSizeTrait>(
    arr: &GenericBinaryArray<O>,
    options: &PolygonBuilderOptions,
) -> Result<GeographyArray> {
    let mut geographies = Vec::with_capacity(arr.len());
    for i in 0..arr.len() {
        if arr.is_valid(i) {
            let geog = GeographyBuilder::new(*options).build_from_wkb(arr.value(i), i as u64)?;
            geographies.push(Some(geog));
        } else {
            geographies.push(None);
        }
    }
    Ok(GeographyArray::new(geographies))
}

/// Encode every geography of `arr` as WKB. Missing geographies become null slots.
pub fn to_wkb<O: OffsetSizeTrait>(arr: &GeographyArray) -> Result<GenericBinaryArray<O>> {
    let mut builder = GenericBinaryBuilder::<O>::with_capacity(arr.len(), 0);
    for maybe_geog in arr.iter() {
        match maybe_geog {
            Some(geog) => builder.append_value(write_wkb(geog)?),
            None => builder.append_null(),
        }
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geography::GeographyTrait;
    use crate::test::{linestring, point_wkb, polygon_with_hole};
    use arrow_array::{BinaryArray, LargeBinaryArray};

    #[test]
    fn nulls_pass_through() {
        let input = BinaryArray::from_opt_vec(vec![
            Some(point_wkb(0.0, 0.0).as_slice()),
            None,
            Some(linestring().as_slice()),
        ]);
        let arr = from_wkb(&input, &Default::default()).unwrap();
        assert_eq!(arr.len(), 3);
        assert!(arr.value(1).is_none());
        assert_eq!(arr.value(2).unwrap().dimension(), 1);

        let output: LargeBinaryArray = to_wkb(&arr).unwrap();
        assert_eq!(output.len(), 3);
        assert!(output.is_null(1));
        assert!(output.is_valid(0));
    }

    #[test]
    fn round_trip_keeps_area() {
        let input = BinaryArray::from_vec(vec![polygon_with_hole().as_slice()]);
        let arr = from_wkb(&input, &Default::default()).unwrap();
        let again = from_wkb(&to_wkb::<i32>(&arr).unwrap(), &Default::default()).unwrap();
        let before = arr.value(0).unwrap().area();
        let after = again.value(0).unwrap().area();
        assert!((before - after).abs() < 1e-12);
    }
}
