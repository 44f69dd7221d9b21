//! Error types for building concatenated output.

use joiner_source_map::SourceMapError;
use thiserror::Error;

/// Errors that can occur while appending to a [`Builder`](crate::Builder).
#[derive(Debug, Error)]
pub enum JoinError {
    /// The node's lines do not reconstruct its content.
    #[error("Invalid node for '{filename}': {reason}")]
    InvalidNode { filename: String, reason: String },

    /// An explicit mapping record cannot be placed in the output.
    #[error("Invalid mapping record {index} for '{filename}': {reason}")]
    InvalidMappingRecord {
        filename: String,
        index: usize,
        reason: String,
    },

    /// The source map generator rejected a mapping.
    #[error("Source map error: {0}")]
    SourceMap(#[from] SourceMapError),
}

/// Result type for builder operations.
pub type JoinResult<T> = Result<T, JoinError>;
