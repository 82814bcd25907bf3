use geozero::{CoordDimensions, ToWkb};

use crate::error::Result;
use crate::geography::Geography;
use crate::io::geozero::builder::{GeographyBuilder, GeographyBuilderTrait, PolygonBuilderOptions};

/// Parse one WKB geometry into a [`Geography`].
///
/// Points and multipoints become point geographies, linestrings and multilinestrings become
/// polylines, and polygons and multipolygons become a single polygon. Any other geometry type is
/// an [`IncorrectType`][crate::error::GeographyError::IncorrectType] error.
pub fn read_wkb(wkb: &[u8], options: &PolygonBuilderOptions) -> Result<Geography> {
    GeographyBuilder::new(*options).build_from_wkb(wkb, 0)
}

/// Encode a [`Geography`] as 2D WKB with `(longitude, latitude)` coordinates in degrees.
pub fn write_wkb(geog: &Geography) -> Result<Vec<u8>> {
    Ok(geog.to_wkb(CoordDimensions::xy())?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeographyError;
    use crate::geography::GeographyTrait;
    use crate::test::{bowtie, point_wkb};

    #[test]
    fn point_round_trip() {
        let geog = read_wkb(&point_wkb(-64.0, 45.0), &Default::default()).unwrap();
        let again = read_wkb(&write_wkb(&geog).unwrap(), &Default::default()).unwrap();
        assert!((again.x().unwrap().unwrap() - -64.0).abs() < 1e-9);
        assert!((again.y().unwrap().unwrap() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_loop_keeps_its_error_kind() {
        let err = read_wkb(&bowtie(), &PolygonBuilderOptions::new(true, false)).unwrap_err();
        assert!(matches!(err, GeographyError::InvalidGeometry(_)));
    }

    #[test]
    fn truncated_wkb_is_a_geozero_error() {
        let mut wkb = point_wkb(1.0, 1.0);
        wkb.truncate(7);
        let err = read_wkb(&wkb, &Default::default()).unwrap_err();
        assert!(matches!(err, GeographyError::GeozeroError(_)));
    }
}
