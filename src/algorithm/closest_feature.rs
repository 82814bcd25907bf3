use arrow_array::builder::Int32Builder;
use arrow_array::Int32Array;
use log::debug;

use crate::array::GeographyArray;
use crate::error::{GeographyError, Result};
use crate::geography::GeographyTrait;
use crate::index::{ClosestEdgeQuery, MutableShapeIndex, ShapeIndexTarget};

/// One index over every geography of a collection, remembering which element each shape came
/// from.
struct CombinedIndex {
    index: MutableShapeIndex,
    source: Vec<usize>,
}

impl CombinedIndex {
    fn try_new(geographies: &GeographyArray) -> Result<Self> {
        let mut index = MutableShapeIndex::new();
        let mut source = vec![];
        for (position, maybe_geog) in geographies.iter().enumerate() {
            let geog = maybe_geog.ok_or_else(|| {
                GeographyError::MissingInput(
                    "Missing `y` not allowed in closest_feature()".into(),
                )
            })?;
            for shape_id in geog.build_shape_index(&mut index) {
                if source.len() <= shape_id {
                    source.resize(shape_id + 1, position);
                }
                source[shape_id] = position;
            }
        }
        debug!(
            "closest feature index over {} geographies ({} shapes, {} edges)",
            geographies.len(),
            index.num_shapes(),
            index.num_edges()
        );
        Ok(Self { index, source })
    }
}

/// For each geography of `x`, the 1-based position of the nearest geography in `y`.
///
/// A position is null when the element of `x` is missing or when nothing in `y` is near it (for
/// example if `y` is empty). Every element of `y` must be present: a missing one is a
/// [`MissingInput`][GeographyError::MissingInput] error before anything is computed.
pub fn closest_feature(x: &GeographyArray, y: &GeographyArray) -> Result<Int32Array> {
    let combined = CombinedIndex::try_new(y)?;
    let query = ClosestEdgeQuery::new(&combined.index);

    let mut output_array = Int32Builder::with_capacity(x.len());
    for maybe_geog in x.iter() {
        let position = maybe_geog.and_then(|geog| {
            let result = query.find_closest_edge(&ShapeIndexTarget::new(geog.shape_index()));
            result
                .shape_id()
                .and_then(|shape_id| combined.source.get(shape_id))
                .map(|position| *position as i32 + 1)
        });
        output_array.append_option(position);
    }
    Ok(output_array.finish())
}
