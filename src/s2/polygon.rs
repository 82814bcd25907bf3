use std::f64::consts::PI;

use crate::s2::{Loop, S2Point};

/// A region bounded by loops.
///
/// Loops are stored normalized (each encloses at most a hemisphere) and each one is tagged as a
/// shell, which adds its interior, or a hole, which removes it. A polygon built only from holes
/// covers the rest of the sphere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    loops: Vec<Loop>,
    holes: Vec<bool>,
    full: bool,
}

impl Polygon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from loops that describe a hierarchy by containment. Loop orientation is ignored:
    /// every loop is normalized, and loops nested at an odd depth are holes.
    pub fn init_nested(loops: Vec<Loop>) -> Self {
        let mut loops = loops;
        loops.iter_mut().for_each(|lp| {
            lp.normalize();
        });

        let holes = (0..loops.len())
            .map(|i| {
                let depth = (0..loops.len())
                    .filter(|&j| j != i && loops[j].contains_loop(&loops[i]))
                    .count();
                depth % 2 == 1
            })
            .collect();

        Self {
            loops,
            holes,
            full: false,
        }
    }

    /// Build from loops whose winding is meaningful: a loop whose interior (the region on its
    /// left) is larger than a hemisphere is a hole.
    pub fn init_oriented(loops: Vec<Loop>) -> Self {
        let mut loops = loops;
        let holes: Vec<bool> = loops.iter_mut().map(|lp| lp.normalize()).collect();
        let full = !holes.is_empty() && holes.iter().all(|hole| *hole);
        Self { loops, holes, full }
    }

    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    pub fn num_loops(&self) -> usize {
        self.loops.len()
    }

    pub fn is_hole(&self, i: usize) -> bool {
        self.holes[i]
    }

    /// Whether the region is the sphere minus its holes.
    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.loops.is_empty()
    }

    pub fn num_vertices(&self) -> usize {
        self.loops.iter().map(|lp| lp.num_vertices()).sum()
    }

    pub fn num_shells(&self) -> usize {
        self.holes.iter().filter(|hole| !**hole).count()
    }

    /// The smallest shell containing hole `i`.
    pub fn parent_shell(&self, i: usize) -> Option<usize> {
        (0..self.loops.len())
            .filter(|&j| j != i && !self.holes[j] && self.loops[j].contains_loop(&self.loops[i]))
            .min_by(|&a, &b| self.loops[a].area().total_cmp(&self.loops[b].area()))
    }

    fn sign(&self, i: usize) -> f64 {
        if self.holes[i] {
            -1.0
        } else {
            1.0
        }
    }

    pub fn contains(&self, point: &S2Point) -> bool {
        let base = if self.full { 1 } else { 0 };
        let count = self
            .loops
            .iter()
            .zip(&self.holes)
            .filter(|(lp, _)| lp.contains(point))
            .fold(base, |acc, (_, hole)| if *hole { acc - 1 } else { acc + 1 });
        count > 0
    }

    /// Area in steradians.
    pub fn area(&self) -> f64 {
        let base = if self.full { 4.0 * PI } else { 0.0 };
        let area = (0..self.loops.len()).fold(base, |acc, i| acc + self.sign(i) * self.loops[i].area());
        area.max(0.0)
    }

    /// Total boundary length in radians.
    pub fn perimeter(&self) -> f64 {
        self.loops.iter().map(|lp| lp.perimeter()).sum()
    }

    /// Un-normalized centroid. Zero for the empty polygon and for polygons symmetric about the
    /// origin.
    pub fn centroid_sum(&self) -> S2Point {
        (0..self.loops.len()).fold(S2Point::default(), |acc, i| {
            acc + self.loops[i].centroid_sum() * self.sign(i)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::s2::point_from_degrees;
    use approx::assert_relative_eq;

    fn ring(min: f64, max: f64) -> Vec<S2Point> {
        vec![
            point_from_degrees(min, min),
            point_from_degrees(max, min),
            point_from_degrees(max, max),
            point_from_degrees(min, max),
        ]
    }

    fn reversed(mut v: Vec<S2Point>) -> Vec<S2Point> {
        v.reverse();
        v
    }

    #[test]
    fn nested_ignores_orientation() {
        let shell = Loop::new(reversed(ring(0.0, 10.0)));
        let hole = Loop::new(ring(4.0, 6.0));
        let polygon = Polygon::init_nested(vec![shell, hole]);

        assert!(!polygon.is_hole(0));
        assert!(polygon.is_hole(1));
        assert_eq!(polygon.parent_shell(1), Some(0));
        assert!(polygon.contains(&point_from_degrees(2.0, 2.0)));
        assert!(!polygon.contains(&point_from_degrees(5.0, 5.0)));
        assert!(!polygon.contains(&point_from_degrees(20.0, 5.0)));

        let expected = Loop::new(ring(0.0, 10.0)).area() - Loop::new(ring(4.0, 6.0)).area();
        assert_relative_eq!(polygon.area(), expected, epsilon = 1e-12);
    }

    #[test]
    fn oriented_respects_winding() {
        let shell = Loop::new(ring(0.0, 10.0));
        let hole = Loop::new(reversed(ring(4.0, 6.0)));
        let polygon = Polygon::init_oriented(vec![shell, hole]);
        assert!(!polygon.is_hole(0));
        assert!(polygon.is_hole(1));
        assert!(!polygon.is_full());
        assert!(!polygon.contains(&point_from_degrees(5.0, 5.0)));
    }

    #[test]
    fn oriented_clockwise_shell_covers_the_rest() {
        let polygon = Polygon::init_oriented(vec![Loop::new(reversed(ring(0.0, 10.0)))]);
        assert!(polygon.is_full());
        assert!(!polygon.contains(&point_from_degrees(5.0, 5.0)));
        assert!(polygon.contains(&point_from_degrees(100.0, -40.0)));
        assert!(polygon.area() > 2.0 * PI);
    }

    #[test]
    fn empty_polygon() {
        let polygon = Polygon::empty();
        assert!(polygon.is_empty());
        assert_eq!(polygon.area(), 0.0);
        assert_eq!(polygon.num_shells(), 0);
    }
}
