use std::ops::{Add, Deref, Mul, Neg, Sub};

use glam::DVec3;

/// A point on the unit sphere, stored as a [`DVec3`].
///
/// Points built through [`LatLng::to_point`][crate::s2::LatLng::to_point] are unit length.
/// Arithmetic results (sums, cross products) are not, and must be [normalized][Self::normalize]
/// before they are used as locations. The components are reachable as `point.x` and so on
/// through [`Deref`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct S2Point(DVec3);

impl S2Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn dot(&self, other: &S2Point) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn cross(&self, other: &S2Point) -> S2Point {
        Self(self.0.cross(other.0))
    }

    #[inline]
    pub fn norm2(&self) -> f64 {
        self.0.length_squared()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.0.length()
    }

    /// Scale to unit length. The zero vector is returned unchanged.
    pub fn normalize(&self) -> S2Point {
        Self(self.0.normalize_or_zero())
    }

    pub fn is_unit_length(&self) -> bool {
        (self.norm2() - 1.0).abs() <= 1e-12
    }

    /// Angle in radians between the two vectors, accurate for small and near-antipodal angles.
    pub fn angle(&self, other: &S2Point) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }

    /// A unit vector orthogonal to this one.
    pub fn ortho(&self) -> S2Point {
        Self(self.0.normalize_or_zero().any_orthonormal_vector())
    }

    pub(crate) fn as_array(&self) -> [f64; 3] {
        self.0.to_array()
    }
}

/// The determinant of the 3x3 matrix with rows `a`, `b`, `c`. Positive when `a`, `b`, `c` wind
/// counter-clockwise seen from outside the sphere.
#[inline]
pub fn det(a: &S2Point, b: &S2Point, c: &S2Point) -> f64 {
    a.0.cross(b.0).dot(c.0)
}

impl Deref for S2Point {
    type Target = DVec3;

    fn deref(&self) -> &DVec3 {
        &self.0
    }
}

impl From<DVec3> for S2Point {
    fn from(value: DVec3) -> Self {
        Self(value)
    }
}

impl Add for S2Point {
    type Output = S2Point;

    fn add(self, rhs: S2Point) -> S2Point {
        Self(self.0 + rhs.0)
    }
}

impl Sub for S2Point {
    type Output = S2Point;

    fn sub(self, rhs: S2Point) -> S2Point {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for S2Point {
    type Output = S2Point;

    fn mul(self, rhs: f64) -> S2Point {
        Self(self.0 * rhs)
    }
}

impl Neg for S2Point {
    type Output = S2Point;

    fn neg(self) -> S2Point {
        Self(-self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angle_between_axes() {
        let x = S2Point::new(1.0, 0.0, 0.0);
        let y = S2Point::new(0.0, 1.0, 0.0);
        assert_relative_eq!(x.angle(&y), FRAC_PI_2);
        assert_relative_eq!(x.angle(&-x), PI);
        assert_eq!(x.angle(&x), 0.0);
    }

    #[test]
    fn ortho_is_orthogonal_unit() {
        let p = S2Point::new(0.3, -0.4, 0.5).normalize();
        let o = p.ortho();
        assert!(o.is_unit_length());
        assert!(p.dot(&o).abs() < 1e-12);
    }

    #[test]
    fn det_sign_follows_winding() {
        let x = S2Point::new(1.0, 0.0, 0.0);
        let y = S2Point::new(0.0, 1.0, 0.0);
        let z = S2Point::new(0.0, 0.0, 1.0);
        assert!(det(&x, &y, &z) > 0.0);
        assert!(det(&y, &x, &z) < 0.0);
    }
}
