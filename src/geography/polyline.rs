use crate::error::{GeographyError, Result};
use crate::geography::{Geography, GeographyTrait, PointGeography};
use crate::index::{LazyShapeIndex, MutableShapeIndex, Shape, ShapeId};
use crate::s2::{Polyline, S2Point};

/// Zero, one or many polylines.
#[derive(Debug, Clone, Default)]
pub struct PolylineGeography {
    polylines: Vec<Polyline>,
    index: LazyShapeIndex,
}

impl PolylineGeography {
    pub fn new(polylines: Vec<Polyline>) -> Self {
        Self {
            polylines,
            index: LazyShapeIndex::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }
}

impl GeographyTrait for PolylineGeography {
    fn is_collection(&self) -> bool {
        self.polylines.len() > 1
    }

    fn dimension(&self) -> usize {
        1
    }

    fn num_points(&self) -> usize {
        self.polylines.iter().map(|p| p.num_vertices()).sum()
    }

    fn area(&self) -> f64 {
        0.0
    }

    fn length(&self) -> f64 {
        self.polylines.iter().map(|p| p.length()).sum()
    }

    fn perimeter(&self) -> f64 {
        0.0
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
        let sum = self
            .polylines
            .iter()
            .fold(S2Point::default(), |acc, p| acc + p.centroid_sum());

        if sum.norm2() == 0.0 {
            Ok(PointGeography::empty().into())
        } else {
            Ok(PointGeography::from_point(sum.normalize()).into())
        }
    }

    /// Endpoints of the open polylines. An endpoint shared by an even number of polylines is
    /// interior to the collection and is left out.
    fn boundary(&self) -> Result<Geography> {
        let mut endpoints: Vec<(S2Point, usize)> = vec![];
        for polyline in self.polylines.iter().filter(|p| p.num_edges() > 0 && !p.is_closed()) {
            let vertices = polyline.vertices();
            for endpoint in [vertices[0], vertices[vertices.len() - 1]] {
                match endpoints.iter_mut().find(|(p, _)| *p == endpoint) {
                    Some((_, count)) => *count += 1,
                    None => endpoints.push((endpoint, 1)),
                }
            }
        }

        let points = endpoints
            .into_iter()
            .filter(|(_, count)| count % 2 == 1)
            .map(|(p, _)| p)
            .collect();
        Ok(PointGeography::new(points).into())
    }

    fn build_shape_index(&self, index: &mut MutableShapeIndex) -> Vec<ShapeId> {
        self.polylines
            .iter()
            .map(|polyline| index.add(Shape::Polyline(polyline.clone())))
            .collect()
    }

    fn lazy_index(&self) -> &LazyShapeIndex {
        &self.index
    }
}
