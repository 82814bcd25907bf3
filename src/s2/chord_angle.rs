use std::cmp::Ordering;
use std::f64::consts::PI;

/// An angle stored as the squared chord length between two points on the unit sphere.
///
/// Besides ordinary angles in `[0, pi]`, two sentinels exist: [`ChordAngle::infinity`], the
/// result of a closest-edge search that found nothing, and [`ChordAngle::negative`], the result
/// of a furthest-edge search that found nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordAngle {
    length2: f64,
}

const MAX_LENGTH2: f64 = 4.0;

impl ChordAngle {
    pub fn zero() -> Self {
        Self { length2: 0.0 }
    }

    pub fn infinity() -> Self {
        Self {
            length2: f64::INFINITY,
        }
    }

    pub fn negative() -> Self {
        Self { length2: -1.0 }
    }

    pub fn from_radians(radians: f64) -> Self {
        if radians < 0.0 {
            Self::negative()
        } else if radians.is_infinite() {
            Self::infinity()
        } else {
            let length = 2.0 * (0.5 * radians.min(PI)).sin();
            Self {
                length2: (length * length).min(MAX_LENGTH2),
            }
        }
    }

    pub fn length2(&self) -> f64 {
        self.length2
    }

    pub fn is_infinity(&self) -> bool {
        self.length2.is_infinite()
    }

    pub fn is_negative(&self) -> bool {
        self.length2 < 0.0
    }

    /// Convert to radians. Infinity maps to `f64::INFINITY` and negative to `-1.0`.
    pub fn radians(&self) -> f64 {
        if self.is_negative() {
            -1.0
        } else if self.is_infinity() {
            f64::INFINITY
        } else {
            2.0 * (0.5 * self.length2.sqrt()).asin()
        }
    }
}

impl PartialOrd for ChordAngle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length2.partial_cmp(&other.length2)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radians_round_trip() {
        for radians in [0.0, 1e-9, 0.5, 2.0, PI] {
            assert_relative_eq!(
                ChordAngle::from_radians(radians).radians(),
                radians,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn sentinels() {
        assert_eq!(ChordAngle::infinity().radians(), f64::INFINITY);
        assert_eq!(ChordAngle::negative().radians(), -1.0);
        assert!(ChordAngle::negative() < ChordAngle::zero());
        assert!(ChordAngle::from_radians(PI) < ChordAngle::infinity());
    }
}
