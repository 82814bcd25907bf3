use std::f64::consts::{FRAC_PI_2, TAU};

use crate::s2::S2Point;

/// A latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    pub fn from_radians(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::from_radians(lat.to_radians(), lng.to_radians())
    }

    pub fn from_point(point: &S2Point) -> Self {
        let lat = point.z.atan2((point.x * point.x + point.y * point.y).sqrt());
        let lng = point.y.atan2(point.x);
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat.to_degrees()
    }

    pub fn lng_degrees(&self) -> f64 {
        self.lng.to_degrees()
    }

    /// Clamp latitude to [-90, 90] degrees and wrap longitude into [-180, 180] degrees.
    pub fn normalized(&self) -> Self {
        let lat = self.lat.clamp(-FRAC_PI_2, FRAC_PI_2);
        let lng = self.lng - (self.lng / TAU).round() * TAU;
        Self { lat, lng }
    }

    pub fn to_point(&self) -> S2Point {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lng, cos_lng) = self.lng.sin_cos();
        S2Point::new(cos_lat * cos_lng, cos_lat * sin_lng, sin_lat)
    }
}

impl From<&S2Point> for LatLng {
    fn from(value: &S2Point) -> Self {
        LatLng::from_point(value)
    }
}

/// Convert an interchange coordinate (longitude, latitude in degrees) to a unit sphere point.
pub fn point_from_degrees(lng: f64, lat: f64) -> S2Point {
    LatLng::from_degrees(lat, lng).normalized().to_point()
}
