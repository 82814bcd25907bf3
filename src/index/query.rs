use std::f64::consts::PI;

use crate::index::{MutableShapeIndex, ShapeId};
use crate::s2::edge::{distance_to_edge, edge_pair_max_distance, edges_cross};
use crate::s2::ChordAngle;

/// A query target made of every shape in another index.
#[derive(Debug, Clone, Copy)]
pub struct ShapeIndexTarget<'a> {
    index: &'a MutableShapeIndex,
}

impl<'a> ShapeIndexTarget<'a> {
    pub fn new(index: &'a MutableShapeIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a MutableShapeIndex {
        self.index
    }
}

/// The outcome of an edge query: which edge of the queried index matched and at what distance.
///
/// An empty result carries [`ChordAngle::infinity`] for closest queries and
/// [`ChordAngle::negative`] for furthest queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeQueryResult {
    shape_id: Option<ShapeId>,
    edge_id: i32,
    distance: ChordAngle,
}

impl EdgeQueryResult {
    fn new(shape_id: ShapeId, edge_id: i32, radians: f64) -> Self {
        Self {
            shape_id: Some(shape_id),
            edge_id,
            distance: ChordAngle::from_radians(radians),
        }
    }

    fn empty(distance: ChordAngle) -> Self {
        Self {
            shape_id: None,
            edge_id: -1,
            distance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shape_id.is_none()
    }

    pub fn shape_id(&self) -> Option<ShapeId> {
        self.shape_id
    }

    /// The matching edge within its shape, or -1 when the match is a polygon interior.
    pub fn edge_id(&self) -> i32 {
        self.edge_id
    }

    pub fn distance(&self) -> ChordAngle {
        self.distance
    }
}

/// Best candidate so far: (shape, edge, radians).
type Candidate = Option<(ShapeId, i32, f64)>;

fn keep_min(best: &mut Candidate, shape_id: ShapeId, edge_id: i32, radians: f64) {
    if best.map_or(true, |(_, _, current)| radians < current) {
        *best = Some((shape_id, edge_id, radians));
    }
}

fn keep_max(best: &mut Candidate, shape_id: ShapeId, edge_id: i32, radians: f64) {
    if best.map_or(true, |(_, _, current)| radians > current) {
        *best = Some((shape_id, edge_id, radians));
    }
}

/// Finds the edge of an index closest to a target.
#[derive(Debug, Clone, Copy)]
pub struct ClosestEdgeQuery<'a> {
    index: &'a MutableShapeIndex,
    include_interiors: bool,
}

impl<'a> ClosestEdgeQuery<'a> {
    pub fn new(index: &'a MutableShapeIndex) -> Self {
        Self {
            index,
            include_interiors: true,
        }
    }

    /// Whether polygon interiors count as being at distance zero. Defaults to `true`.
    pub fn with_include_interiors(self, include_interiors: bool) -> Self {
        Self {
            include_interiors,
            ..self
        }
    }

    pub fn find_closest_edge(&self, target: &ShapeIndexTarget) -> EdgeQueryResult {
        let target = target.index();
        if self.index.is_empty() || target.is_empty() {
            return EdgeQueryResult::empty(ChordAngle::infinity());
        }

        if self.include_interiors {
            if let Some((shape_id, edge_id)) = self.find_interior_overlap(target) {
                return EdgeQueryResult::new(shape_id, edge_id, 0.0);
            }
        }

        // Two edges that do not cross are closest at an endpoint of one of them.
        let mut best: Candidate = None;
        for target_edge in target.indexed_edges() {
            if !target_edge.edge.is_degenerate() {
                for candidate in self.index.crossing_candidates(&target_edge.edge) {
                    let (a, b) = (&candidate.edge.v0, &candidate.edge.v1);
                    if edges_cross(a, b, &target_edge.edge.v0, &target_edge.edge.v1) {
                        return EdgeQueryResult::new(candidate.shape_id, candidate.edge_id as i32, 0.0);
                    }
                }
            }

            for vertex in endpoints(&target_edge.edge) {
                if let Some((edge, radians)) = self.index.nearest_edge(vertex) {
                    keep_min(&mut best, edge.shape_id, edge.edge_id as i32, radians);
                }
            }
        }

        // Only query vertices closer to a target edge than the best so far can improve it.
        for target_edge in target.indexed_edges() {
            let (c, d) = (&target_edge.edge.v0, &target_edge.edge.v1);
            let radius = best.map_or(PI, |(_, _, radians)| radians);
            for query_edge in self.index.edges_near(&target_edge.edge, radius) {
                for vertex in endpoints(&query_edge.edge) {
                    keep_min(
                        &mut best,
                        query_edge.shape_id,
                        query_edge.edge_id as i32,
                        distance_to_edge(vertex, c, d),
                    );
                }
            }
        }

        match best {
            Some((shape_id, edge_id, radians)) => EdgeQueryResult::new(shape_id, edge_id, radians),
            None => EdgeQueryResult::empty(ChordAngle::infinity()),
        }
    }

    /// A query shape that overlaps the target through a polygon interior, on either side.
    fn find_interior_overlap(&self, target: &MutableShapeIndex) -> Option<(ShapeId, i32)> {
        for (shape_id, shape) in self.index.interior_shapes() {
            for (_, target_shape) in target.shapes() {
                if target_shape
                    .chain_starts()
                    .iter()
                    .any(|(_, vertex)| shape.contains(vertex))
                {
                    return Some((shape_id, -1));
                }
            }
        }

        for (_, target_shape) in target.interior_shapes() {
            for (shape_id, shape) in self.index.shapes() {
                if let Some((edge_id, _)) = shape
                    .chain_starts()
                    .into_iter()
                    .find(|(_, vertex)| target_shape.contains(vertex))
                {
                    return Some((shape_id, edge_id as i32));
                }
            }
        }

        None
    }
}

/// Finds the edge of an index furthest from a target.
#[derive(Debug, Clone, Copy)]
pub struct FurthestEdgeQuery<'a> {
    index: &'a MutableShapeIndex,
    include_interiors: bool,
}

impl<'a> FurthestEdgeQuery<'a> {
    pub fn new(index: &'a MutableShapeIndex) -> Self {
        Self {
            index,
            include_interiors: true,
        }
    }

    /// Whether polygon interiors take part in the search. Defaults to `true`.
    pub fn with_include_interiors(self, include_interiors: bool) -> Self {
        Self {
            include_interiors,
            ..self
        }
    }

    pub fn find_furthest_edge(&self, target: &ShapeIndexTarget) -> EdgeQueryResult {
        let target = target.index();
        if self.index.is_empty() || target.is_empty() {
            return EdgeQueryResult::empty(ChordAngle::negative());
        }

        // An interior holding the antipode of a point on the other side is as far as it gets.
        if self.include_interiors {
            if let Some((shape_id, edge_id)) = self.find_antipodal_interior(target) {
                return EdgeQueryResult::new(shape_id, edge_id, PI);
            }
        }

        let mut best: Candidate = None;
        for query_edge in self.index.indexed_edges() {
            let (a, b) = (&query_edge.edge.v0, &query_edge.edge.v1);
            for target_edge in target.indexed_edges() {
                let radians =
                    edge_pair_max_distance(a, b, &target_edge.edge.v0, &target_edge.edge.v1);
                keep_max(
                    &mut best,
                    query_edge.shape_id,
                    query_edge.edge_id as i32,
                    radians,
                );
            }
        }

        match best {
            Some((shape_id, edge_id, radians)) => EdgeQueryResult::new(shape_id, edge_id, radians),
            None => EdgeQueryResult::empty(ChordAngle::negative()),
        }
    }

    fn find_antipodal_interior(&self, target: &MutableShapeIndex) -> Option<(ShapeId, i32)> {
        for (shape_id, shape) in self.index.interior_shapes() {
            for (_, target_shape) in target.shapes() {
                if target_shape
                    .chain_starts()
                    .iter()
                    .any(|(_, vertex)| shape.contains(&-*vertex))
                {
                    return Some((shape_id, -1));
                }
            }
        }

        for (_, target_shape) in target.interior_shapes() {
            for (shape_id, shape) in self.index.shapes() {
                if let Some((edge_id, _)) = shape
                    .chain_starts()
                    .into_iter()
                    .find(|(_, vertex)| target_shape.contains(&-*vertex))
                {
                    return Some((shape_id, edge_id as i32));
                }
            }
        }

        None
    }
}

fn endpoints(edge: &crate::index::Edge) -> impl Iterator<Item = &crate::s2::S2Point> {
    let second = (!edge.is_degenerate()).then_some(&edge.v1);
    std::iter::once(&edge.v0).chain(second)
}
