use std::f64::consts::{PI, TAU};

use itertools::Itertools;

use crate::s2::edge::{arc_crosses_edge, edges_cross, true_centroid, turn_angle};
use crate::s2::S2Point;

/// A closed ring of points. The closing edge from the last vertex back to the first is implicit.
///
/// The interior of a loop is the region to the left of its edges, so a small counter-clockwise
/// loop encloses a small region and the same vertices in clockwise order enclose the rest of the
/// sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    vertices: Vec<S2Point>,
    /// A point just left of the first non-degenerate edge, contained by construction.
    reference: Option<S2Point>,
}

impl Loop {
    pub fn new(vertices: Vec<S2Point>) -> Self {
        let reference = reference_point(&vertices);
        Self {
            vertices,
            reference,
        }
    }

    pub fn vertices(&self) -> &[S2Point] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn vertex(&self, i: usize) -> &S2Point {
        &self.vertices[i % self.vertices.len()]
    }

    /// Iterate over the edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&S2Point, &S2Point)> + '_ {
        self.vertices.iter().circular_tuple_windows::<(_, _)>()
    }

    /// Whether the loop passes [`find_validation_error`][Self::find_validation_error].
    pub fn is_valid(&self) -> bool {
        self.find_validation_error().is_none()
    }

    /// Describe the first problem that makes this loop invalid, if any.
    pub fn find_validation_error(&self) -> Option<String> {
        let n = self.vertices.len();
        if n < 3 {
            return Some(format!(
                "Non-empty, non-full loops must have at least 3 vertices, found {}",
                n
            ));
        }

        for (i, v) in self.vertices.iter().enumerate() {
            if !v.is_unit_length() {
                return Some(format!("Vertex {} is not unit length", i));
            }
        }

        for (i, (a, b)) in self.edges().enumerate() {
            if a == b {
                return Some(format!("Edge {} is degenerate (duplicate vertex)", i));
            }
            if *a == -*b {
                return Some(format!("Vertices {} and {} are antipodal", i, (i + 1) % n));
            }
        }

        let edges = self.edges().collect::<Vec<_>>();
        for i in 0..n {
            for j in (i + 2)..n {
                // first and last edges share vertex 0
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = edges[i];
                let (c, d) = edges[j];
                if edges_cross(a, b, c, d) {
                    return Some(format!("Edge {} crosses edge {}", i, j));
                }
            }
        }

        None
    }

    /// Sum of the turning angles at every vertex.
    fn turning_angle(&self) -> f64 {
        self.vertices
            .iter()
            .circular_tuple_windows::<(_, _, _)>()
            .map(|(a, b, c)| turn_angle(a, b, c))
            .sum()
    }

    /// Area of the interior in steradians, in `[0, 4 pi]`.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (TAU - self.turning_angle()).clamp(0.0, 4.0 * PI)
    }

    /// Total edge length in radians.
    pub fn perimeter(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.angle(b)).sum()
    }

    /// Whether the interior is larger than a hemisphere.
    pub fn is_hemisphere_or_larger(&self) -> bool {
        self.area() > TAU
    }

    /// Reverse the vertex order, swapping interior and exterior.
    pub fn invert(&mut self) {
        self.vertices.reverse();
        self.reference = reference_point(&self.vertices);
    }

    /// Invert the loop if needed so that its interior is at most a hemisphere. Returns whether
    /// the loop was inverted.
    pub fn normalize(&mut self) -> bool {
        if self.is_hemisphere_or_larger() {
            self.invert();
            true
        } else {
            false
        }
    }

    /// Whether `point` lies in the interior of the loop.
    pub fn contains(&self, point: &S2Point) -> bool {
        let Some(reference) = self.reference else {
            return false;
        };

        // Keep every test arc shorter than a half circle.
        let crossings = if reference.dot(point) < -0.5 {
            let waypoint = waypoint_for(&reference);
            self.count_crossings(&reference, &waypoint) + self.count_crossings(&waypoint, point)
        } else {
            self.count_crossings(&reference, point)
        };

        crossings % 2 == 0
    }

    fn count_crossings(&self, from: &S2Point, to: &S2Point) -> usize {
        self.edges()
            .filter(|(a, b)| arc_crosses_edge(from, to, a, b))
            .count()
    }

    /// Whether every vertex of `other` that is not shared with this loop lies inside this loop.
    pub fn contains_loop(&self, other: &Loop) -> bool {
        let mut tested = false;
        for v in other.vertices() {
            if self.vertices.contains(v) {
                continue;
            }
            if !self.contains(v) {
                return false;
            }
            tested = true;
        }
        tested
    }

    /// Un-normalized centroid, summed over a triangle fan from the first vertex.
    pub fn centroid_sum(&self) -> S2Point {
        if self.is_empty() {
            return S2Point::default();
        }
        let origin = self.vertices[0];
        self.vertices[1..]
            .iter()
            .tuple_windows()
            .fold(S2Point::default(), |acc, (b, c)| {
                acc + true_centroid(&origin, b, c)
            })
    }
}

/// A point a quarter turn away from `reference`, off the coordinate grid so that test arcs do not
/// run along loop edges.
fn waypoint_for(reference: &S2Point) -> S2Point {
    let skew = reference.cross(&S2Point::new(0.0123, 0.0345, 0.9993));
    if skew.norm2() > 1e-6 {
        skew.normalize()
    } else {
        reference.ortho()
    }
}

fn reference_point(vertices: &[S2Point]) -> Option<S2Point> {
    if vertices.len() < 3 {
        return None;
    }

    vertices
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .find(|(a, b)| a != b && **a != -**b)
        .map(|(a, b)| {
            let mid = (*a + *b).normalize();
            let left = a.cross(b).normalize();
            (mid + left * 1e-9).normalize()
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::s2::point_from_degrees;
    use approx::assert_relative_eq;

    fn square(offset: f64, size: f64) -> Loop {
        Loop::new(vec![
            point_from_degrees(offset, offset),
            point_from_degrees(offset + size, offset),
            point_from_degrees(offset + size, offset + size),
            point_from_degrees(offset, offset + size),
        ])
    }

    #[test]
    fn ccw_square_contains_center() {
        let lp = square(0.0, 10.0);
        assert!(lp.is_valid());
        assert!(lp.contains(&point_from_degrees(5.0, 5.0)));
        assert!(!lp.contains(&point_from_degrees(15.0, 5.0)));
        assert!(!lp.contains(&point_from_degrees(-175.0, -5.0)));
        assert!(!lp.is_hemisphere_or_larger());
    }

    #[test]
    fn clockwise_square_is_its_complement() {
        let mut lp = square(0.0, 10.0);
        lp.invert();
        assert!(lp.is_hemisphere_or_larger());
        assert!(!lp.contains(&point_from_degrees(5.0, 5.0)));
        assert!(lp.contains(&point_from_degrees(90.0, 45.0)));

        assert!(lp.normalize());
        assert!(lp.contains(&point_from_degrees(5.0, 5.0)));
    }

    #[test]
    fn area_of_octant() {
        let lp = Loop::new(vec![
            S2Point::new(1.0, 0.0, 0.0),
            S2Point::new(0.0, 1.0, 0.0),
            S2Point::new(0.0, 0.0, 1.0),
        ]);
        assert_relative_eq!(lp.area(), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(lp.perimeter(), 3.0 * PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn bowtie_is_invalid() {
        let lp = Loop::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(10.0, 10.0),
            point_from_degrees(10.0, 0.0),
            point_from_degrees(0.0, 10.0),
        ]);
        assert_eq!(
            lp.find_validation_error().as_deref(),
            Some("Edge 0 crosses edge 2")
        );
    }

    #[test]
    fn grid_aligned_vertex_keeps_parity() {
        // The reference point sits above the middle of the bottom edge, so test arcs towards
        // (5, y) run along the meridian through the vertex (5, 10).
        let notched = Loop::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(10.0, 0.0),
            point_from_degrees(10.0, 10.0),
            point_from_degrees(5.0, 10.0),
            point_from_degrees(0.0, 10.0),
        ]);
        let triangle = Loop::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(10.0, 0.0),
            point_from_degrees(5.0, 10.0),
        ]);
        for lp in [&notched, &triangle] {
            assert!(lp.contains(&point_from_degrees(5.0, 5.0)));
            for lat in [15.0, 30.0, 40.0] {
                assert!(!lp.contains(&point_from_degrees(5.0, lat)), "lat {}", lat);
            }
        }
    }

    #[test]
    fn too_few_vertices_is_invalid() {
        let lp = Loop::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(10.0, 10.0),
        ]);
        assert!(!lp.is_valid());
        assert!(lp.is_empty());
        assert!(!lp.contains(&point_from_degrees(5.0, 5.0)));
    }

    #[test]
    fn duplicate_vertex_is_invalid() {
        let lp = Loop::new(vec![
            point_from_degrees(0.0, 0.0),
            point_from_degrees(0.0, 0.0),
            point_from_degrees(10.0, 0.0),
            point_from_degrees(0.0, 10.0),
        ]);
        assert_eq!(
            lp.find_validation_error().as_deref(),
            Some("Edge 0 is degenerate (duplicate vertex)")
        );
    }
}
