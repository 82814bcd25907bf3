use crate::array::GeographyArray;
use crate::error::Result;
use crate::geography::GeographyTrait;

/// Calculation of the centroid.
pub trait Centroid {
    type Output;

    /// The centroid of each geography as a point geography. Empty geographies have an empty
    /// centroid. A point set with more than one point is an error.
    fn centroid(&self) -> Self::Output;
}

impl Centroid for GeographyArray {
    type Output = Result<GeographyArray>;

    fn centroid(&self) -> Self::Output {
        self.iter()
            .map(|maybe_g| maybe_g.map(|g| g.centroid()).transpose())
            .collect::<Result<Vec<_>>>()
            .map(GeographyArray::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeographyError;
    use crate::geography::PointGeography;
    use crate::s2::point_from_degrees;

    #[test]
    fn centroid_keeps_missing_rows() {
        let arr: GeographyArray = vec![
            Some(PointGeography::from_point(point_from_degrees(3.0, 4.0)).into()),
            None,
            Some(PointGeography::empty().into()),
        ]
        .into();
        let centroids = arr.centroid().unwrap();
        assert_eq!(centroids.len(), 3);
        assert_eq!(centroids.value(0).unwrap().num_points(), 1);
        assert!(centroids.value(1).is_none());
        assert_eq!(centroids.value(2).unwrap().num_points(), 0);
    }

    #[test]
    fn multipoint_centroid_fails() {
        let arr: GeographyArray = vec![Some(
            PointGeography::new(vec![
                point_from_degrees(0.0, 0.0),
                point_from_degrees(1.0, 1.0),
            ])
            .into(),
        )]
        .into();
        assert!(matches!(
            arr.centroid(),
            Err(GeographyError::UnsupportedOperation(_))
        ));
    }
}
