use geozero::{FeatureProcessor, GeomProcessor, PropertyProcessor};

use crate::error::{GeographyError, Result};
use crate::geography::{Geography, PointGeography};
use crate::io::geozero::builder::{reject_geometry_types, GeographyBuilderTrait};
use crate::s2::{point_from_degrees, S2Point};

/// Collects points and multipoints into a [`PointGeography`].
#[derive(Debug, Default)]
pub struct PointBuilder {
    points: Vec<S2Point>,
    error: Option<GeographyError>,
}

impl PointBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeographyBuilderTrait for PointBuilder {
    fn build(mut self) -> Result<Geography> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        Ok(PointGeography::new(self.points).into())
    }

    fn take_error(&mut self) -> Option<GeographyError> {
        self.error.take()
    }
}

#[allow(unused_variables)]
impl GeomProcessor for PointBuilder {
    fn xy(&mut self, x: f64, y: f64, idx: usize) -> geozero::error::Result<()> {
        // POINT EMPTY arrives as a NaN coordinate
        if x.is_finite() && y.is_finite() {
            self.points.push(point_from_degrees(x, y));
        }
        Ok(())
    }

    fn empty_point(&mut self, idx: usize) -> geozero::error::Result<()> {
        Ok(())
    }

    fn point_begin(&mut self, idx: usize) -> geozero::error::Result<()> {
        Ok(())
    }

    fn multipoint_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        self.points.reserve(size);
        Ok(())
    }

    reject_geometry_types! {
        "Can't create a point geography from a geometry that is not a point";
        linestring_begin(tagged: bool, size: usize, idx: usize),
        multilinestring_begin(size: usize, idx: usize),
        polygon_begin(tagged: bool, size: usize, idx: usize),
        multipolygon_begin(size: usize, idx: usize),
        geometrycollection_begin(size: usize, idx: usize),
        circularstring_begin(size: usize, idx: usize),
        compoundcurve_begin(size: usize, idx: usize),
        curvepolygon_begin(size: usize, idx: usize),
        multicurve_begin(size: usize, idx: usize),
        multisurface_begin(size: usize, idx: usize),
        triangle_begin(tagged: bool, size: usize, idx: usize),
        polyhedralsurface_begin(size: usize, idx: usize),
        tin_begin(size: usize, idx: usize),
    }
}

impl PropertyProcessor for PointBuilder {}

impl FeatureProcessor for PointBuilder {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geography::GeographyTrait;
    use crate::test::{linestring, multipoint, point_wkb};

    #[test]
    fn single_point() {
        let geog = PointBuilder::new().build_from_wkb(&point_wkb(1.0, 2.0), 0).unwrap();
        assert_eq!(geog.num_points(), 1);
        let x = geog.x().unwrap().unwrap();
        let y = geog.y().unwrap().unwrap();
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn multipoint_keeps_every_point() {
        let geog = PointBuilder::new().build_from_wkb(&multipoint(), 0).unwrap();
        assert_eq!(geog.num_points(), 3);
        assert!(geog.is_collection());
    }

    #[test]
    fn linestring_is_rejected() {
        let err = PointBuilder::new()
            .build_from_wkb(&linestring(), 0)
            .unwrap_err();
        assert!(matches!(err, GeographyError::IncorrectType(_)));
    }
}
