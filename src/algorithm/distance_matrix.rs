use arrow_array::{Array, Float64Array};
use arrow_buffer::{NullBuffer, ScalarBuffer};
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::array::GeographyArray;
use crate::geography::{Geography, GeographyTrait};
use crate::index::{ClosestEdgeQuery, FurthestEdgeQuery, ShapeIndexTarget};

/// A dense `|A| x |B|` matrix of angular distances in radians, stored row-major.
///
/// A cell is null when either input geography is missing or when the distance is undefined
/// because one side has nothing indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    num_rows: usize,
    num_columns: usize,
    values: Float64Array,
}

impl DistanceMatrix {
    fn new(num_rows: usize, num_columns: usize, cells: Vec<Option<f64>>) -> Self {
        let validity = cells.iter().map(|cell| cell.is_some()).collect::<Vec<_>>();
        let values = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_default())
            .collect::<Vec<_>>();
        let values = Float64Array::new(ScalarBuffer::from(values), Some(NullBuffer::from(validity)));
        Self {
            num_rows,
            num_columns,
            values,
        }
    }

    /// `(rows, columns)`, always the lengths of the two inputs.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_columns)
    }

    /// The distance between `A[i]` and `B[j]`, or `None` if that cell is null.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        assert!(i < self.num_rows && j < self.num_columns);
        let offset = i * self.num_columns + j;
        self.values
            .is_valid(offset)
            .then(|| self.values.value(offset))
    }

    /// The distances from `A[i]` to every element of `B`.
    pub fn row(&self, i: usize) -> Float64Array {
        assert!(i < self.num_rows);
        self.values.slice(i * self.num_columns, self.num_columns)
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &Float64Array {
        &self.values
    }

    pub fn into_values(self) -> Float64Array {
        self.values
    }
}

fn compute<F>(a: &GeographyArray, b: &GeographyArray, cell: F) -> DistanceMatrix
where
    F: Fn(&Geography, &Geography) -> Option<f64> + Sync,
{
    let row = |maybe_a: Option<&Geography>| -> Vec<Option<f64>> {
        b.iter()
            .map(|maybe_b| match (maybe_a, maybe_b) {
                (Some(geog_a), Some(geog_b)) => cell(geog_a, geog_b),
                _ => None,
            })
            .collect()
    };

    #[cfg(feature = "rayon")]
    let rows: Vec<Vec<Option<f64>>> = (0..a.len())
        .into_par_iter()
        .map(|i| row(a.value(i)))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let rows: Vec<Vec<Option<f64>>> = a.iter().map(row).collect();

    DistanceMatrix::new(a.len(), b.len(), rows.into_iter().flatten().collect())
}

/// Minimum distance between two geographies, `None` if either has nothing indexed.
fn min_distance(a: &Geography, b: &Geography) -> Option<f64> {
    let query = ClosestEdgeQuery::new(a.shape_index());
    let result = query.find_closest_edge(&ShapeIndexTarget::new(b.shape_index()));
    let distance = result.distance();
    (!distance.is_infinity()).then(|| distance.radians())
}

/// Maximum distance between two geographies, `None` if either has nothing indexed.
fn max_distance(a: &Geography, b: &Geography) -> Option<f64> {
    let query = FurthestEdgeQuery::new(a.shape_index());
    let result = query.find_furthest_edge(&ShapeIndexTarget::new(b.shape_index()));
    let distance = result.distance();
    (!distance.is_negative()).then(|| distance.radians())
}

/// The minimum angular distance in radians between every pair of geographies in `a` and `b`.
pub fn distance_matrix(a: &GeographyArray, b: &GeographyArray) -> DistanceMatrix {
    debug!("distance matrix of {} x {} geographies", a.len(), b.len());
    compute(a, b, min_distance)
}

/// The maximum angular distance in radians between every pair of geographies in `a` and `b`.
///
/// Never negative: pairs where one side is empty are null.
pub fn max_distance_matrix(a: &GeographyArray, b: &GeographyArray) -> DistanceMatrix {
    debug!("max distance matrix of {} x {} geographies", a.len(), b.len());
    compute(a, b, max_distance)
}
