use geozero::{FeatureProcessor, GeomProcessor, PropertyProcessor};

use crate::error::{GeographyError, Result};
use crate::geography::{Geography, PolylineGeography};
use crate::io::geozero::builder::{fail, reject_geometry_types, GeographyBuilderTrait};
use crate::s2::{point_from_degrees, Polyline, S2Point};

#[derive(Debug, Default)]
enum PolylineState {
    /// Between linestrings.
    #[default]
    Idle,
    /// Inside a linestring; one slot per announced vertex.
    InLine(Vec<Option<S2Point>>),
}

/// Collects linestrings and multilinestrings into a [`PolylineGeography`].
///
/// Vertices are placed by the coordinate index they arrive with, so every announced vertex must
/// be delivered before the linestring ends.
#[derive(Debug, Default)]
pub struct PolylineBuilder {
    state: PolylineState,
    polylines: Vec<Polyline>,
    error: Option<GeographyError>,
}

impl PolylineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeographyBuilderTrait for PolylineBuilder {
    fn build(mut self) -> Result<Geography> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if let PolylineState::InLine(_) = self.state {
            return Err(GeographyError::InvalidGeometry(
                "Linestring was started but never finished".to_string(),
            ));
        }
        Ok(PolylineGeography::new(self.polylines).into())
    }

    fn take_error(&mut self) -> Option<GeographyError> {
        self.error.take()
    }
}

#[allow(unused_variables)]
impl GeomProcessor for PolylineBuilder {
    fn xy(&mut self, x: f64, y: f64, idx: usize) -> geozero::error::Result<()> {
        match &mut self.state {
            PolylineState::InLine(vertices) => match vertices.get_mut(idx) {
                Some(slot) => {
                    *slot = Some(point_from_degrees(x, y));
                    Ok(())
                }
                None => {
                    let size = vertices.len();
                    fail(
                        &mut self.error,
                        GeographyError::InvalidGeometry(format!(
                            "Coordinate {} is out of range for a linestring of {} vertices",
                            idx, size
                        )),
                    )
                }
            },
            PolylineState::Idle => fail(
                &mut self.error,
                GeographyError::IncorrectType(
                    "Can't create a polyline from a coordinate outside of a linestring".into(),
                ),
            ),
        }
    }

    fn multilinestring_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        self.polylines.reserve(size);
        Ok(())
    }

    fn linestring_begin(
        &mut self,
        tagged: bool,
        size: usize,
        idx: usize,
    ) -> geozero::error::Result<()> {
        if let PolylineState::InLine(_) = self.state {
            return fail(
                &mut self.error,
                GeographyError::InvalidGeometry(
                    "Linestring started before the previous one ended".to_string(),
                ),
            );
        }
        self.state = PolylineState::InLine(vec![None; size]);
        Ok(())
    }

    fn linestring_end(&mut self, tagged: bool, idx: usize) -> geozero::error::Result<()> {
        let PolylineState::InLine(slots) = std::mem::take(&mut self.state) else {
            return fail(
                &mut self.error,
                GeographyError::InvalidGeometry("Linestring ended without being started".into()),
            );
        };

        let announced = slots.len();
        let vertices = slots.into_iter().flatten().collect::<Vec<_>>();
        if vertices.len() != announced {
            return fail(
                &mut self.error,
                GeographyError::InvalidGeometry(format!(
                    "Linestring announced {} vertices but received {}",
                    announced,
                    vertices.len()
                )),
            );
        }

        self.polylines.push(Polyline::new(vertices));
        Ok(())
    }

    reject_geometry_types! {
        "Can't create a polyline from a geometry that is not a linestring";
        empty_point(idx: usize),
        point_begin(idx: usize),
        multipoint_begin(size: usize, idx: usize),
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

impl PropertyProcessor for PolylineBuilder {}

impl FeatureProcessor for PolylineBuilder {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geography::GeographyTrait;
    use crate::test::{linestring, multilinestring, point_wkb};

    #[test]
    fn linestring_vertices_in_order() {
        let geog = PolylineBuilder::new()
            .build_from_wkb(&linestring(), 0)
            .unwrap();
        let polylines = geog.as_polyline().unwrap().polylines();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].num_vertices(), 3);
        assert!(!geog.is_collection());
    }

    #[test]
    fn multilinestring_makes_one_polyline_per_part() {
        let geog = PolylineBuilder::new()
            .build_from_wkb(&multilinestring(), 0)
            .unwrap();
        assert_eq!(geog.as_polyline().unwrap().polylines().len(), 2);
        assert!(geog.is_collection());
    }

    #[test]
    fn vertices_land_in_announced_slots() {
        let mut builder = PolylineBuilder::new();
        builder.linestring_begin(true, 2, 0).unwrap();
        builder.xy(10.0, 0.0, 1).unwrap();
        builder.xy(0.0, 0.0, 0).unwrap();
        builder.linestring_end(true, 0).unwrap();

        let geog = builder.build().unwrap();
        let polyline = &geog.as_polyline().unwrap().polylines()[0];
        assert_eq!(polyline.vertices()[0], point_from_degrees(0.0, 0.0));
        assert_eq!(polyline.vertices()[1], point_from_degrees(10.0, 0.0));
    }

    #[test]
    fn missing_vertex_is_an_error() {
        let mut builder = PolylineBuilder::new();
        builder.linestring_begin(true, 3, 0).unwrap();
        builder.xy(0.0, 0.0, 0).unwrap();
        assert!(builder.linestring_end(true, 0).is_err());
        assert!(matches!(
            builder.build(),
            Err(GeographyError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn point_is_rejected() {
        let err = PolylineBuilder::new()
            .build_from_wkb(&point_wkb(0.0, 0.0), 0)
            .unwrap_err();
        assert!(matches!(err, GeographyError::IncorrectType(_)));
    }
}
