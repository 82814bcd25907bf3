//! Defines [`GeographyError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::borrow::Cow;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeographyError {
    /// A capability was invoked on a geography variant that does not support it, such as the X
    /// coordinate of a polyline or the centroid of a multi-point.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(Cow<'static, str>),

    /// A loop failed topological validation. Carries the validator's message.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A required input element was missing.
    #[error("Missing input: {0}")]
    MissingInput(Cow<'static, str>),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// [geozero::error::GeozeroError]
    #[error(transparent)]
    GeozeroError(#[from] geozero::error::GeozeroError),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeographyError>;

impl From<GeographyError> for ArrowError {
    fn from(err: GeographyError) -> Self {
        match err {
            GeographyError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}

impl From<GeographyError> for geozero::error::GeozeroError {
    fn from(err: GeographyError) -> Self {
        match err {
            GeographyError::GeozeroError(err) => err,
            err => geozero::error::GeozeroError::Geometry(err.to_string()),
        }
    }
}
