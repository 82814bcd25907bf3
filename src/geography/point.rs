use crate::error::{GeographyError, Result};
use crate::geography::{Geography, GeographyTrait};
use crate::index::{LazyShapeIndex, MutableShapeIndex, Shape, ShapeId};
use crate::s2::{LatLng, S2Point};

/// Zero, one or many points. A single point and a multi-point are both represented here.
#[derive(Debug, Clone, Default)]
pub struct PointGeography {
    points: Vec<S2Point>,
    index: LazyShapeIndex,
}

impl PointGeography {
    pub fn new(points: Vec<S2Point>) -> Self {
        Self {
            points,
            index: LazyShapeIndex::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_point(point: S2Point) -> Self {
        Self::new(vec![point])
    }

    pub fn points(&self) -> &[S2Point] {
        &self.points
    }

    fn single_lat_lng(&self) -> Option<LatLng> {
        match self.points.as_slice() {
            [point] => Some(LatLng::from_point(point)),
            _ => None,
        }
    }
}

impl GeographyTrait for PointGeography {
    fn is_collection(&self) -> bool {
        self.points.len() > 1
    }

    fn dimension(&self) -> usize {
        0
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn area(&self) -> f64 {
        0.0
    }

    fn length(&self) -> f64 {
        0.0
    }

    fn perimeter(&self) -> f64 {
        0.0
    }

    fn x(&self) -> Result<Option<f64>> {
        Ok(self.single_lat_lng().map(|ll| ll.lng_degrees()))
    }

    fn y(&self) -> Result<Option<f64>> {
        Ok(self.single_lat_lng().map(|ll| ll.lat_degrees()))
    }

    fn centroid(&self) -> Result<Geography> {
        match self.points.as_slice() {
            [] => Ok(PointGeography::empty().into()),
            [point] => Ok(PointGeography::from_point(*point).into()),
            _ => Err(GeographyError::UnsupportedOperation(
                "Can't compute centroid for more than one point".into(),
            )),
        }
    }

    fn boundary(&self) -> Result<Geography> {
        Ok(PointGeography::empty().into())
    }

    fn build_shape_index(&self, index: &mut MutableShapeIndex) -> Vec<ShapeId> {
        vec![index.add(Shape::PointVector(self.points.clone()))]
    }

    fn lazy_index(&self) -> &LazyShapeIndex {
        &self.index
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::s2::point_from_degrees;
    use approx::assert_relative_eq;

    #[test]
    fn single_point_accessors() {
        let geog = PointGeography::from_point(point_from_degrees(-64.0, 45.0));
        assert!(!geog.is_collection());
        assert_eq!(geog.dimension(), 0);
        assert_eq!(geog.num_points(), 1);
        assert_eq!(geog.area(), 0.0);
        assert_eq!(geog.length(), 0.0);
        assert_eq!(geog.perimeter(), 0.0);
        assert_relative_eq!(geog.x().unwrap().unwrap(), -64.0, epsilon = 1e-12);
        assert_relative_eq!(geog.y().unwrap().unwrap(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn xy_not_available_unless_single_point() {
        let empty = PointGeography::empty();
        assert_eq!(empty.x().unwrap(), None);
        assert_eq!(empty.y().unwrap(), None);

        let multi = PointGeography::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(1.0, 1.0),
        ]);
        assert!(multi.is_collection());
        assert_eq!(multi.x().unwrap(), None);
        assert_eq!(multi.y().unwrap(), None);
    }

    #[test]
    fn centroid_rules() {
        let empty = PointGeography::empty().centroid().unwrap();
        assert_eq!(empty.num_points(), 0);

        let p = point_from_degrees(3.0, 4.0);
        let single = PointGeography::from_point(p).centroid().unwrap();
        assert_eq!(single.as_point().unwrap().points(), &[p]);

        let multi = PointGeography::new(vec![p, point_from_degrees(5.0, 6.0)]);
        assert!(matches!(
            multi.centroid(),
            Err(GeographyError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn boundary_is_empty() {
        let geog = PointGeography::from_point(point_from_degrees(3.0, 4.0));
        let boundary = geog.boundary().unwrap();
        assert_eq!(boundary.dimension(), 0);
        assert_eq!(boundary.num_points(), 0);
    }

    #[test]
    fn index_is_built_lazily_once() {
        let geog = PointGeography::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(1.0, 1.0),
        ]);
        assert!(!geog.lazy_index().is_built());

        assert_eq!(geog.shape_index().num_shapes(), 1);
        assert_eq!(geog.shape_index().num_edges(), 2);
        assert_eq!(geog.lazy_index().build_count(), 1);
    }
}
