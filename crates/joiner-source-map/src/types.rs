//! Core types for source mapping

use serde::{Deserialize, Serialize};

/// A position in a text stream as used by source maps
///
/// Lines are 1-indexed, columns are 0-indexed and counted in UTF-16 code
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// A single correspondence between a generated position and, optionally,
/// a position in an original source file
///
/// A mapping without an original position is "generated-only": it marks a
/// segment of output that has no counterpart in any source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub generated: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mapping {
    /// Create a mapping from a generated position to a position in `source`
    pub fn new(generated: Position, original: Position, source: impl Into<String>) -> Self {
        Mapping {
            generated,
            original: Some(original),
            source: Some(source.into()),
            name: None,
        }
    }

    /// Create a mapping that covers generated output with no original position
    pub fn generated_only(generated: Position) -> Self {
        Mapping {
            generated,
            original: None,
            source: None,
            name: None,
        }
    }

    /// Attach a symbol name to this mapping
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_generated_only(&self) -> bool {
        self.original.is_none()
    }
}
