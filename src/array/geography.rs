use arrow_array::{BinaryArray, GenericBinaryArray, OffsetSizeTrait};

use crate::error::Result;
use crate::geography::Geography;
use crate::io::geozero::builder::PolygonBuilderOptions;
use crate::io::wkb;

/// A sequence of geographies where any slot may be missing.
///
/// Missing slots are skipped or yield nulls in vectorized operations, depending on the
/// operation.
#[derive(Debug, Clone, Default)]
pub struct GeographyArray {
    geographies: Vec<Option<Geography>>,
}

impl GeographyArray {
    pub fn new(geographies: Vec<Option<Geography>>) -> Self {
        Self { geographies }
    }

    /// Parse WKB geometries, with nulls becoming missing slots.
    pub fn from_wkb<O: OffsetSizeTrait>(
        arr: &GenericBinaryArray<O>,
        options: &PolygonBuilderOptions,
    ) -> Result<Self> {
        wkb::from_wkb(arr, options)
    }

    /// Encode as WKB, with missing slots becoming nulls.
    pub fn to_wkb(&self) -> Result<BinaryArray> {
        wkb::to_wkb(self)
    }

    pub fn len(&self) -> usize {
        self.geographies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geographies.is_empty()
    }

    /// The geography at slot `i`, or `None` if it is missing.
    ///
    /// # Panics
    ///
    /// If `i` is out of bounds.
    pub fn value(&self, i: usize) -> Option<&Geography> {
        self.geographies[i].as_ref()
    }

    pub fn get(&self, i: usize) -> Option<Option<&Geography>> {
        self.geographies.get(i).map(|g| g.as_ref())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&Geography>> + '_ {
        self.geographies.iter().map(|g| g.as_ref())
    }

    pub fn null_count(&self) -> usize {
        self.geographies.iter().filter(|g| g.is_none()).count()
    }

    pub fn into_inner(self) -> Vec<Option<Geography>> {
        self.geographies
    }
}

impl From<Vec<Option<Geography>>> for GeographyArray {
    fn from(value: Vec<Option<Geography>>) -> Self {
        Self::new(value)
    }
}

impl From<Vec<Geography>> for GeographyArray {
    fn from(value: Vec<Geography>) -> Self {
        Self::new(value.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<Geography>> for GeographyArray {
    fn from_iter<T: IntoIterator<Item = Option<Geography>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
