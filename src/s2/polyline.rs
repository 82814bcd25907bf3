use itertools::Itertools;

use crate::s2::S2Point;

/// An open chain of great-circle edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    vertices: Vec<S2Point>,
}

impl Polyline {
    pub fn new(vertices: Vec<S2Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[S2Point] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&S2Point, &S2Point)> + '_ {
        self.vertices.iter().tuple_windows()
    }

    /// Total length in radians.
    pub fn length(&self) -> f64 {
        self.edges().map(|(a, b)| a.angle(b)).sum()
    }

    /// Un-normalized centroid: edge midpoints weighted by edge length.
    pub fn centroid_sum(&self) -> S2Point {
        self.edges().fold(S2Point::default(), |acc, (a, b)| {
            let mid = (*a + *b).normalize();
            acc + mid * a.angle(b)
        })
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.len() > 1 && self.vertices.first() == self.vertices.last()
    }
}
