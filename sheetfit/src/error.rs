use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fallible operations of this library
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors surfaced by the library.
///
/// Conditions that only affect a single sheet format (too much margin, product not fitting)
/// are not errors during [`compute`](crate::calc::compute): they are reported per row through
/// [`LayoutStatus`](crate::entities::LayoutStatus).
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Product width or height is missing, non-numeric or not strictly positive.
    /// Blocks all computation.
    #[error("invalid product dimension '{field}': {value}, must be a number > 0")]
    InvalidProductDimension { field: String, value: String },

    /// Width or height of a sheet format is not strictly positive.
    #[error("invalid sheet format dimension '{field}': {value}, must be a number > 0")]
    InvalidFormatDimension { field: String, value: String },

    /// No usable area remains on the sheet after subtracting the margins.
    #[error("insufficient margin: no usable area left on sheet '{format}'")]
    InsufficientMargin { format: String },

    /// Persisted custom formats could not be parsed.
    #[error("persisted catalog under '{key}' is corrupt: {reason}")]
    PersistedCatalogCorrupt { key: String, reason: String },

    /// File system operation failed
    #[error("{operation} on '{path}' failed: {reason}")]
    Io {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization failed
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl CalcError {
    pub fn invalid_product(field: impl Into<String>, value: impl ToString) -> Self {
        CalcError::InvalidProductDimension {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, value: impl ToString) -> Self {
        CalcError::InvalidFormatDimension {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn io(operation: impl Into<String>, path: impl Into<String>, err: impl ToString) -> Self {
        CalcError::Io {
            operation: operation.into(),
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Short code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidProductDimension { .. } => "INVALID_PRODUCT_DIMENSION",
            CalcError::InvalidFormatDimension { .. } => "INVALID_FORMAT_DIMENSION",
            CalcError::InsufficientMargin { .. } => "INSUFFICIENT_MARGIN",
            CalcError::PersistedCatalogCorrupt { .. } => "PERSISTED_CATALOG_CORRUPT",
            CalcError::Io { .. } => "IO_ERROR",
            CalcError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Serialization {
            reason: err.to_string(),
        }
    }
}
