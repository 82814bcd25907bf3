//! Builders turning a geozero event stream into a [`Geography`].
//!
//! Each builder consumes the events of exactly one feature and is finalized once with
//! [`GeographyBuilderTrait::build`], which takes the builder by value.
//!
//! geozero callbacks can only fail with a [`GeozeroError`]. When a builder rejects an event it
//! keeps the underlying [`GeographyError`] and hands it back from `build` or
//! [`take_error`][GeographyBuilderTrait::take_error], so callers see the real error kind.

mod geography;
mod options;
mod point;
mod polygon;
mod polyline;

pub use geography::GeographyBuilder;
pub use options::PolygonBuilderOptions;
pub use point::PointBuilder;
pub use polygon::PolygonBuilder;
pub use polyline::PolylineBuilder;

use std::io::Cursor;

use geozero::error::GeozeroError;
use geozero::wkb::process_wkb_geom;
use geozero::FeatureProcessor;

use crate::error::{GeographyError, Result};
use crate::geography::Geography;

/// A stateful consumer of geometry events that produces one [`Geography`].
pub trait GeographyBuilderTrait: FeatureProcessor + Sized {
    /// Finalize the accumulated geometry.
    fn build(self) -> Result<Geography>;

    /// The error that made a previous event fail, if any.
    fn take_error(&mut self) -> Option<GeographyError>;

    /// Feed one WKB-encoded feature through this builder and finalize it.
    fn build_from_wkb(mut self, wkb: &[u8], feature_idx: u64) -> Result<Geography> {
        if let Err(err) = process_feature(&mut self, wkb, feature_idx) {
            return Err(self.take_error().unwrap_or_else(|| err.into()));
        }
        self.build()
    }
}

fn process_feature<P: FeatureProcessor>(
    processor: &mut P,
    wkb: &[u8],
    feature_idx: u64,
) -> geozero::error::Result<()> {
    processor.feature_begin(feature_idx)?;
    process_wkb_geom(&mut Cursor::new(wkb), processor)?;
    processor.feature_end(feature_idx)
}

/// Record `err` in `slot` and abort the event stream.
pub(crate) fn fail<T>(
    slot: &mut Option<GeographyError>,
    err: GeographyError,
) -> geozero::error::Result<T> {
    let message = err.to_string();
    if slot.is_none() {
        *slot = Some(err);
    }
    Err(GeozeroError::Geometry(message))
}

/// Implement `GeomProcessor` methods that reject a geometry type with an `IncorrectType` error.
macro_rules! reject_geometry_types {
    ($message:expr; $($name:ident($($arg:ident: $ty:ty),*)),+ $(,)?) => {
        $(
            fn $name(&mut self, $($arg: $ty),*) -> geozero::error::Result<()> {
                $crate::io::geozero::builder::fail(
                    &mut self.error,
                    $crate::error::GeographyError::IncorrectType($message.into()),
                )
            }
        )+
    };
}

pub(crate) use reject_geometry_types;
