//! Error types for building and reading source maps.

use crate::types::Position;
use thiserror::Error;

/// Errors that can occur while building or decoding a source map.
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// A mapping was rejected by the generator.
    #[error("Invalid mapping at generated {}:{}: {reason}", generated.line, generated.column)]
    InvalidMapping { generated: Position, reason: String },

    /// The `mappings` string contains malformed base64 VLQ data.
    #[error("Invalid VLQ data at byte {position}: {message}")]
    InvalidVlq { position: usize, message: String },

    /// Only revision 3 source maps are supported.
    #[error("Unsupported source map version: {0}")]
    UnsupportedVersion(u32),

    /// A segment refers to a source that is not listed in `sources`.
    #[error("Source index {index} out of range ({count} sources)")]
    SourceIndexOutOfRange { index: i64, count: usize },

    /// A segment refers to a name that is not listed in `names`.
    #[error("Name index {index} out of range ({count} names)")]
    NameIndexOutOfRange { index: i64, count: usize },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for source map operations.
pub type Result<T> = std::result::Result<T, SourceMapError>;
