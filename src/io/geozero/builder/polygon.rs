use geozero::{FeatureProcessor, GeomProcessor, PropertyProcessor};
use log::trace;

use crate::error::{GeographyError, Result};
use crate::geography::{Geography, PolygonGeography};
use crate::io::geozero::builder::{
    fail, reject_geometry_types, GeographyBuilderTrait, PolygonBuilderOptions,
};
use crate::s2::{point_from_degrees, Loop, Polygon, S2Point};

#[derive(Debug, Default)]
enum PolygonState {
    /// Outside of any polygon.
    #[default]
    Idle,
    /// Inside a polygon, between rings.
    InPolygon,
    /// Inside a ring. The closing vertex repeats the first one and has no slot.
    InRing(Vec<Option<S2Point>>),
}

/// Collects polygons and multipolygons into a [`PolygonGeography`].
///
/// Rings of every polygon in a feature go into a single pool of loops. When the feature ends the
/// pool is assembled into one polygon, either by containment or by winding depending on
/// [`PolygonBuilderOptions::oriented`].
#[derive(Debug, Default)]
pub struct PolygonBuilder {
    options: PolygonBuilderOptions,
    state: PolygonState,
    loops: Vec<Loop>,
    assembled: Option<Polygon>,
    error: Option<GeographyError>,
}

impl PolygonBuilder {
    pub fn new(options: PolygonBuilderOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &PolygonBuilderOptions {
        &self.options
    }

    fn assemble(&mut self) -> Polygon {
        let loops = std::mem::take(&mut self.loops);
        if self.options.oriented {
            Polygon::init_oriented(loops)
        } else {
            Polygon::init_nested(loops)
        }
    }

    fn finish_ring(&mut self, slots: Vec<Option<S2Point>>) -> geozero::error::Result<()> {
        let announced = slots.len();
        let vertices = slots.into_iter().flatten().collect::<Vec<_>>();
        if vertices.len() != announced {
            return fail(
                &mut self.error,
                GeographyError::InvalidGeometry(format!(
                    "Ring announced {} vertices but received {}",
                    announced + 1,
                    vertices.len()
                )),
            );
        }
        if vertices.is_empty() {
            return Ok(());
        }

        let ring = Loop::new(vertices);
        trace!(
            "ring {} with {} vertices",
            self.loops.len(),
            ring.num_vertices()
        );
        if self.options.check {
            if let Some(reason) = ring.find_validation_error() {
                return fail(
                    &mut self.error,
                    GeographyError::InvalidGeometry(format!(
                        "Loop {}: {}",
                        self.loops.len(),
                        reason
                    )),
                );
            }
        }
        self.loops.push(ring);
        Ok(())
    }
}

impl GeographyBuilderTrait for PolygonBuilder {
    fn build(mut self) -> Result<Geography> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if !matches!(self.state, PolygonState::Idle) {
            return Err(GeographyError::InvalidGeometry(
                "Polygon was started but never finished".to_string(),
            ));
        }
        let polygon = match self.assembled.take() {
            Some(polygon) => polygon,
            None => self.assemble(),
        };
        Ok(PolygonGeography::new(polygon).into())
    }

    fn take_error(&mut self) -> Option<GeographyError> {
        self.error.take()
    }
}

#[allow(unused_variables)]
impl GeomProcessor for PolygonBuilder {
    fn xy(&mut self, x: f64, y: f64, idx: usize) -> geozero::error::Result<()> {
        match &mut self.state {
            PolygonState::InRing(slots) => {
                if let Some(slot) = slots.get_mut(idx) {
                    *slot = Some(point_from_degrees(x, y));
                }
                Ok(())
            }
            _ => fail(
                &mut self.error,
                GeographyError::IncorrectType(
                    "Can't create a polygon from a coordinate outside of a ring".into(),
                ),
            ),
        }
    }

    fn multipolygon_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        Ok(())
    }

    fn polygon_begin(
        &mut self,
        tagged: bool,
        size: usize,
        idx: usize,
    ) -> geozero::error::Result<()> {
        if !matches!(self.state, PolygonState::Idle) {
            return fail(
                &mut self.error,
                GeographyError::InvalidGeometry(
                    "Polygon started before the previous one ended".to_string(),
                ),
            );
        }
        self.loops.reserve(size);
        self.state = PolygonState::InPolygon;
        Ok(())
    }

    fn polygon_end(&mut self, tagged: bool, idx: usize) -> geozero::error::Result<()> {
        match self.state {
            PolygonState::InPolygon => {
                self.state = PolygonState::Idle;
                Ok(())
            }
            _ => fail(
                &mut self.error,
                GeographyError::InvalidGeometry("Polygon ended outside of a polygon".to_string()),
            ),
        }
    }

    fn linestring_begin(
        &mut self,
        tagged: bool,
        size: usize,
        idx: usize,
    ) -> geozero::error::Result<()> {
        match self.state {
            PolygonState::InPolygon => {
                self.state = PolygonState::InRing(vec![None; size.saturating_sub(1)]);
                Ok(())
            }
            _ => fail(
                &mut self.error,
                GeographyError::IncorrectType(
                    "Can't create a polygon from a geometry that is not a polygon".into(),
                ),
            ),
        }
    }

    fn linestring_end(&mut self, tagged: bool, idx: usize) -> geozero::error::Result<()> {
        match std::mem::take(&mut self.state) {
            PolygonState::InRing(slots) => {
                self.state = PolygonState::InPolygon;
                self.finish_ring(slots)
            }
            _ => fail(
                &mut self.error,
                GeographyError::InvalidGeometry("Ring ended without being started".to_string()),
            ),
        }
    }

    reject_geometry_types! {
        "Can't create a polygon from a geometry that is not a polygon";
        empty_point(idx: usize),
        point_begin(idx: usize),
        multipoint_begin(size: usize, idx: usize),
        multilinestring_begin(size: usize, idx: usize),
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

impl PropertyProcessor for PolygonBuilder {}

#[allow(unused_variables)]
impl FeatureProcessor for PolygonBuilder {
    fn feature_begin(&mut self, idx: u64) -> geozero::error::Result<()> {
        self.loops.clear();
        self.assembled = None;
        Ok(())
    }

    fn feature_end(&mut self, idx: u64) -> geozero::error::Result<()> {
        if self.error.is_none() {
            self.assembled = Some(self.assemble());
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geography::GeographyTrait;
    use crate::test::{bowtie, clockwise_square, linestring, multipolygon, polygon_with_hole};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn polygon_with_hole_by_containment() {
        let geog = PolygonBuilder::new(Default::default())
            .build_from_wkb(&polygon_with_hole(), 0)
            .unwrap();
        let polygon = geog.as_polygon().unwrap().polygon();
        assert_eq!(polygon.num_loops(), 2);
        assert!(!polygon.is_hole(0));
        assert!(polygon.is_hole(1));
        assert_eq!(geog.num_points(), 8);
    }

    #[test]
    fn multipolygon_has_two_shells() {
        let geog = PolygonBuilder::new(Default::default())
            .build_from_wkb(&multipolygon(), 0)
            .unwrap();
        assert!(geog.is_collection());
        assert_eq!(geog.as_polygon().unwrap().polygon().num_shells(), 2);
    }

    #[test]
    fn self_intersecting_ring_fails_check() {
        let err = PolygonBuilder::new(PolygonBuilderOptions::new(true, false))
            .build_from_wkb(&bowtie(), 0)
            .unwrap_err();
        match err {
            GeographyError::InvalidGeometry(message) => {
                assert!(message.contains("crosses"), "{}", message)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn self_intersecting_ring_without_check() {
        let geog = PolygonBuilder::new(PolygonBuilderOptions::new(false, false))
            .build_from_wkb(&bowtie(), 0)
            .unwrap();
        assert_eq!(geog.as_polygon().unwrap().polygon().num_loops(), 1);
    }

    #[test]
    fn winding_matters_only_when_oriented() {
        let nested = PolygonBuilder::new(PolygonBuilderOptions::new(true, false))
            .build_from_wkb(&clockwise_square(), 0)
            .unwrap();
        assert!(nested.area() < PI);

        let oriented = PolygonBuilder::new(PolygonBuilderOptions::new(true, true))
            .build_from_wkb(&clockwise_square(), 0)
            .unwrap();
        assert!(oriented.as_polygon().unwrap().polygon().is_full());
        assert_relative_eq!(oriented.area() + nested.area(), 4.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn linestring_is_rejected() {
        let err = PolygonBuilder::new(Default::default())
            .build_from_wkb(&linestring(), 0)
            .unwrap_err();
        assert!(matches!(err, GeographyError::IncorrectType(_)));
    }
}
