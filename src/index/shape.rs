use crate::s2::{Polygon, Polyline, S2Point};

/// Position of a shape inside a [`MutableShapeIndex`][crate::index::MutableShapeIndex].
pub type ShapeId = usize;

/// A great-circle edge. Points are stored as degenerate edges with `v0 == v1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v0: S2Point,
    pub v1: S2Point,
}

impl Edge {
    pub fn new(v0: S2Point, v1: S2Point) -> Self {
        Self { v0, v1 }
    }

    pub fn is_degenerate(&self) -> bool {
        self.v0 == self.v1
    }
}

/// A geometric object that can be added to a shape index.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A set of points, each one a degenerate edge.
    PointVector(Vec<S2Point>),
    Polyline(Polyline),
    /// The edges of every loop, plus the interior for containment tests.
    Polygon(Polygon),
}

impl Shape {
    pub fn dimension(&self) -> usize {
        match self {
            Shape::PointVector(_) => 0,
            Shape::Polyline(_) => 1,
            Shape::Polygon(_) => 2,
        }
    }

    pub fn num_edges(&self) -> usize {
        match self {
            Shape::PointVector(points) => points.len(),
            Shape::Polyline(polyline) => polyline.num_edges(),
            Shape::Polygon(polygon) => polygon.num_vertices(),
        }
    }

    pub fn edges(&self) -> Vec<Edge> {
        match self {
            Shape::PointVector(points) => points.iter().map(|p| Edge::new(*p, *p)).collect(),
            Shape::Polyline(polyline) => polyline
                .edges()
                .map(|(a, b)| Edge::new(*a, *b))
                .collect(),
            Shape::Polygon(polygon) => polygon
                .loops()
                .iter()
                .flat_map(|lp| lp.edges().map(|(a, b)| Edge::new(*a, *b)))
                .collect(),
        }
    }

    /// One vertex per connected piece, with the id of an edge starting there. If two shapes'
    /// edges do not cross, one of these points per piece decides containment for the whole piece.
    pub fn chain_starts(&self) -> Vec<(usize, S2Point)> {
        match self {
            Shape::PointVector(points) => points.iter().copied().enumerate().collect(),
            Shape::Polyline(polyline) => match polyline.vertices().first() {
                Some(first) if polyline.num_edges() > 0 => vec![(0, *first)],
                _ => vec![],
            },
            Shape::Polygon(polygon) => {
                let mut edge_offset = 0;
                polygon
                    .loops()
                    .iter()
                    .filter_map(|lp| {
                        let start = lp.vertices().first().map(|v| (edge_offset, *v));
                        edge_offset += lp.num_vertices();
                        start
                    })
                    .collect()
            }
        }
    }

    /// Whether the interior of the shape contains `point`. Only polygons have an interior.
    pub fn contains(&self, point: &S2Point) -> bool {
        match self {
            Shape::Polygon(polygon) => polygon.contains(point),
            _ => false,
        }
    }

    pub fn has_interior(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }
}
