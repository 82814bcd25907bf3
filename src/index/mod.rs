//! Spatial indexing of shapes and edge queries between indexes.

mod lazy;
mod query;
mod shape;

pub use lazy::LazyShapeIndex;
pub use query::{ClosestEdgeQuery, EdgeQueryResult, FurthestEdgeQuery, ShapeIndexTarget};
pub use shape::{Edge, Shape, ShapeId};

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::s2::edge::distance_to_edge;
use crate::s2::{ChordAngle, S2Point};

/// An edge stored in the R-tree together with where it came from.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEdge {
    pub(crate) shape_id: ShapeId,
    pub(crate) edge_id: usize,
    pub(crate) edge: Edge,
    envelope: AABB<[f64; 3]>,
}

impl IndexedEdge {
    fn new(shape_id: ShapeId, edge_id: usize, edge: Edge) -> Self {
        let envelope = edge_envelope(&edge);
        Self {
            shape_id,
            edge_id,
            edge,
            envelope,
        }
    }

    /// Angle in radians from `point` to this edge.
    pub(crate) fn distance(&self, point: &S2Point) -> f64 {
        distance_to_edge(point, &self.edge.v0, &self.edge.v1)
    }
}

/// A 3-D box enclosing the whole arc, not just its endpoints: the arc lies in the triangle
/// formed by its endpoints and the intersection of the tangents at those endpoints.
fn edge_envelope(edge: &Edge) -> AABB<[f64; 3]> {
    let Edge { v0, v1 } = edge;
    let denom = 1.0 + v0.dot(v1);
    if denom < 1e-12 {
        return AABB::from_corners([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]);
    }
    let apex = (*v0 + *v1) * (1.0 / denom);
    AABB::from_points(&[v0.as_array(), v1.as_array(), apex.as_array()])
}

impl RTreeObject for IndexedEdge {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl PointDistance for IndexedEdge {
    /// Squared chord length to the closest point of the arc. The envelope encloses the arc, so the
    /// envelope distance never exceeds this.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let point = S2Point::new(point[0], point[1], point[2]);
        ChordAngle::from_radians(self.distance(&point)).length2()
    }
}

/// An index of shapes. Shapes can be added but never removed; every added shape gets the next
/// [`ShapeId`].
#[derive(Debug, Clone, Default)]
pub struct MutableShapeIndex {
    shapes: Vec<Shape>,
    /// Shapes with an interior, so that containment checks skip points and polylines.
    interiors: Vec<ShapeId>,
    edges: RTree<IndexedEdge>,
}

impl MutableShapeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape and return its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let shape_id = self.shapes.len();
        for (edge_id, edge) in shape.edges().into_iter().enumerate() {
            self.edges.insert(IndexedEdge::new(shape_id, edge_id, edge));
        }
        if shape.has_interior() {
            self.interiors.push(shape_id);
        }
        self.shapes.push(shape);
        shape_id
    }

    pub fn num_shapes(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape(&self, shape_id: ShapeId) -> Option<&Shape> {
        self.shapes.get(shape_id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.shapes.iter().enumerate()
    }

    /// Shapes that have an interior, in id order.
    pub fn interior_shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.interiors
            .iter()
            .map(|shape_id| (*shape_id, &self.shapes[*shape_id]))
    }

    pub fn num_edges(&self) -> usize {
        self.edges.size()
    }

    /// Whether the index covers no part of the sphere at all.
    pub fn is_empty(&self) -> bool {
        self.num_edges() == 0
            && !self
                .shapes
                .iter()
                .any(|shape| matches!(shape, Shape::Polygon(polygon) if polygon.is_full()))
    }

    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = &IndexedEdge> + '_ {
        self.edges.iter()
    }

    /// The edge closest to `point` and its distance in radians.
    pub(crate) fn nearest_edge(&self, point: &S2Point) -> Option<(&IndexedEdge, f64)> {
        self.edges
            .nearest_neighbor(&point.as_array())
            .map(|edge| (edge, edge.distance(point)))
    }

    /// Edges that may have a vertex within `radians` of `edge`: their envelope overlaps the
    /// envelope of `edge` grown by the matching chord length.
    pub(crate) fn edges_near(
        &self,
        edge: &Edge,
        radians: f64,
    ) -> impl Iterator<Item = &IndexedEdge> + '_ {
        let margin = ChordAngle::from_radians(radians).length2().sqrt();
        let envelope = edge_envelope(edge);
        let grown = AABB::from_corners(
            envelope.lower().map(|c| c - margin),
            envelope.upper().map(|c| c + margin),
        );
        self.edges.locate_in_envelope_intersecting(&grown)
    }

    /// Edges whose envelope overlaps the envelope of `edge`.
    pub(crate) fn crossing_candidates(&self, edge: &Edge) -> Vec<&IndexedEdge> {
        let envelope = edge_envelope(edge);
        self.edges
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }
}
