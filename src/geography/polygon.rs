use crate::error::{GeographyError, Result};
use crate::geography::{Geography, GeographyTrait, PointGeography, PolylineGeography};
use crate::index::{LazyShapeIndex, MutableShapeIndex, Shape, ShapeId};
use crate::s2::{Polygon, Polyline};

/// A polygon with any number of shells and holes.
#[derive(Debug, Clone, Default)]
pub struct PolygonGeography {
    polygon: Polygon,
    index: LazyShapeIndex,
}

impl PolygonGeography {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            index: LazyShapeIndex::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl GeographyTrait for PolygonGeography {
    fn is_collection(&self) -> bool {
        self.polygon.num_shells() > 1
    }

    fn dimension(&self) -> usize {
        2
    }

    fn num_points(&self) -> usize {
        self.polygon.num_vertices()
    }

    fn area(&self) -> f64 {
        self.polygon.area()
    }

    fn length(&self) -> f64 {
        0.0
    }

    fn perimeter(&self) -> f64 {
        self.polygon.perimeter()
    }

    fn x(&self) -> Result<Option<f64>> {
        Err(GeographyError::UnsupportedOperation(
            "Can't compute X value of a non-point geography".into(),
        ))
    }

    fn y(&self) -> Result<Option<f64>> {
        Err(GeographyError::UnsupportedOperation(
            "Can't compute Y value of a non-point geography".into(),
        ))
    }

    fn centroid(&self) -> Result<Geography> {
        let sum = self.polygon.centroid_sum();
        if sum.norm2() == 0.0 {
            Ok(PointGeography::empty().into())
        } else {
            Ok(PointGeography::from_point(sum.normalize()).into())
        }
    }

    /// Every loop as a closed polyline.
    fn boundary(&self) -> Result<Geography> {
        let polylines = self
            .polygon
            .loops()
            .iter()
            .filter(|lp| !lp.vertices().is_empty())
            .map(|lp| {
                let mut vertices = lp.vertices().to_vec();
                vertices.push(lp.vertices()[0]);
                Polyline::new(vertices)
            })
            .collect();
        Ok(PolylineGeography::new(polylines).into())
    }

    fn build_shape_index(&self, index: &mut MutableShapeIndex) -> Vec<ShapeId> {
        vec![index.add(Shape::Polygon(self.polygon.clone()))]
    }

    fn lazy_index(&self) -> &LazyShapeIndex {
        &self.index
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::s2::{point_from_degrees, LatLng, Loop};
    use approx::assert_relative_eq;

    fn square(min: f64, max: f64) -> Loop {
        Loop::new(vec![
            point_from_degrees(min, min),
            point_from_degrees(max, min),
            point_from_degrees(max, max),
            point_from_degrees(min, max),
        ])
    }

    #[test]
    fn measures() {
        let geog = PolygonGeography::new(Polygon::init_nested(vec![square(0.0, 10.0)]));
        assert!(!geog.is_collection());
        assert_eq!(geog.dimension(), 2);
        assert_eq!(geog.num_points(), 4);
        assert!(geog.area() > 0.0);
        assert_relative_eq!(geog.area(), square(0.0, 10.0).area());
        assert_eq!(geog.length(), 0.0);
        assert!(geog.perimeter() > 40f64.to_radians() * 0.95);
        assert!(geog.x().is_err());
    }

    #[test]
    fn two_shells_are_a_collection() {
        let geog = PolygonGeography::new(Polygon::init_nested(vec![
            square(0.0, 10.0),
            square(20.0, 30.0),
        ]));
        assert!(geog.is_collection());
    }

    #[test]
    fn centroid_inside_square() {
        let geog = PolygonGeography::new(Polygon::init_nested(vec![square(0.0, 10.0)]));
        let centroid = geog.centroid().unwrap();
        let ll = LatLng::from_point(&centroid.as_point().unwrap().points()[0]);
        assert_relative_eq!(ll.lng_degrees(), 5.0, epsilon = 1e-6);
        assert!(ll.lat_degrees() > 4.9 && ll.lat_degrees() < 5.2);
    }

    #[test]
    fn boundary_closes_each_loop() {
        let geog = PolygonGeography::new(Polygon::init_nested(vec![
            square(0.0, 10.0),
            square(4.0, 6.0),
        ]));
        let boundary = geog.boundary().unwrap();
        let polylines = boundary.as_polyline().unwrap().polylines();
        assert_eq!(polylines.len(), 2);
        assert!(polylines.iter().all(|p| p.is_closed() && p.num_vertices() == 5));
    }
}
