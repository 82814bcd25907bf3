//! Distance and crossing predicates for great-circle edges.
//!
//! An edge `(a, b)` is the minor arc between two unit vectors. A degenerate edge with `a == b`
//! stands for a single point; this is how point shapes take part in edge queries.

use std::f64::consts::PI;

use crate::s2::point::det;
use crate::s2::S2Point;

/// Minimum angle in radians between `x` and any point of the edge `(a, b)`.
pub fn distance_to_edge(x: &S2Point, a: &S2Point, b: &S2Point) -> f64 {
    if a == b {
        return x.angle(a);
    }

    let n = a.cross(b);
    let n_norm = n.norm();
    // The closest point of the great circle lies inside the arc when x is strictly on the inner
    // side of both endpoint planes.
    if n_norm > 0.0 && a.cross(x).dot(&n) > 0.0 && x.cross(b).dot(&n) > 0.0 {
        let sin_dist = (x.dot(&n) / n_norm).abs().min(1.0);
        return sin_dist.asin();
    }

    x.angle(a).min(x.angle(b))
}

/// Whether the edges `(a, b)` and `(c, d)` cross at a point interior to both.
///
/// Edges that only touch at a vertex, or that share a vertex, do not cross.
pub fn edges_cross(a: &S2Point, b: &S2Point, c: &S2Point, d: &S2Point) -> bool {
    let n1 = a.cross(b);
    let n2 = c.cross(d);

    let side_c = n1.dot(c);
    let side_d = n1.dot(d);
    if side_c * side_d >= 0.0 {
        return false;
    }

    let side_a = n2.dot(a);
    let side_b = n2.dot(b);
    if side_a * side_b >= 0.0 {
        return false;
    }

    // Both great circles meet at +t and -t. A minor arc can only contain the one on the same
    // side as its midpoint.
    let t = n1.cross(&n2);
    t.dot(&(*a + *b)) * t.dot(&(*c + *d)) > 0.0
}

/// Whether the test arc `(from, to)` crosses the loop edge `(a, b)`, for point-in-loop parity.
///
/// Loop vertices are classified half-open against the arc's great circle: a vertex exactly on it
/// counts as lying to the right. An arc passing through a vertex therefore crosses exactly one of
/// the two edges meeting there when the loop passes through, and zero or two when it only touches.
pub fn arc_crosses_edge(from: &S2Point, to: &S2Point, a: &S2Point, b: &S2Point) -> bool {
    let a_left = det(from, to, a) > 0.0;
    let b_left = det(from, to, b) > 0.0;
    if a_left == b_left {
        return false;
    }

    let side_from = det(a, b, from);
    let side_to = det(a, b, to);
    if side_from * side_to >= 0.0 {
        return false;
    }

    let t = from.cross(to).cross(&a.cross(b));
    t.dot(&(*from + *to)) * t.dot(&(*a + *b)) > 0.0
}

/// Minimum angle in radians between two edges.
pub fn edge_pair_distance(a: &S2Point, b: &S2Point, c: &S2Point, d: &S2Point) -> f64 {
    if edges_cross(a, b, c, d) {
        return 0.0;
    }

    distance_to_edge(a, c, d)
        .min(distance_to_edge(b, c, d))
        .min(distance_to_edge(c, a, b))
        .min(distance_to_edge(d, a, b))
}

/// Maximum angle in radians between any point of `(a, b)` and any point of `(c, d)`.
pub fn edge_pair_max_distance(a: &S2Point, b: &S2Point, c: &S2Point, d: &S2Point) -> f64 {
    PI - edge_pair_distance(a, b, &-*c, &-*d)
}

/// The signed exterior angle at `b` of the path `a -> b -> c`, positive for a left turn.
pub fn turn_angle(a: &S2Point, b: &S2Point, c: &S2Point) -> f64 {
    let n1 = a.cross(b);
    let n2 = b.cross(c);
    n1.cross(&n2).dot(b).atan2(n1.dot(&n2))
}

/// The integral of position over the spherical triangle `(a, b, c)`, signed by orientation.
/// Summing this over a fan of triangles gives the exact (un-normalized) centroid of a loop.
pub fn true_centroid(a: &S2Point, b: &S2Point, c: &S2Point) -> S2Point {
    let ratio = |angle: f64| if angle == 0.0 { 1.0 } else { angle / angle.sin() };
    let ra = ratio(b.angle(c));
    let rb = ratio(c.angle(a));
    let rc = ratio(a.angle(b));

    // Rows relative to `a` for stability.
    let x = S2Point::new(a.x, b.x - a.x, c.x - a.x);
    let y = S2Point::new(a.y, b.y - a.y, c.y - a.y);
    let z = S2Point::new(a.z, b.z - a.z, c.z - a.z);
    let r = S2Point::new(ra, rb - ra, rc - ra);

    S2Point::new(
        y.cross(&z).dot(&r),
        z.cross(&x).dot(&r),
        x.cross(&y).dot(&r),
    ) * 0.5
}
