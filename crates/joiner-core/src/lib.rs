//! Source-mapped concatenation
//!
//! This crate joins content fragments ("nodes") from a build pipeline into
//! a single output while recording where each generated line came from.
//! The result is the joined text plus a source map produced by
//! [`joiner_source_map`].
//!
//! # Overview
//!
//! The core types are:
//! - [`Builder`]: Owns all state for one output artifact
//! - [`Node`]: Anything that supplies text, its lines, and whether its
//!   lines should share one original line
//! - [`MappingRecord`]: Explicit mappings carried by pre-mapped content
//! - [`Offset`]: A line/column cursor
//!
//! # Example
//!
//! ```rust
//! use joiner_core::{Builder, BuilderOptions, TextNode};
//!
//! let mut builder = Builder::new(BuilderOptions::with_mapping());
//! builder.append("header.js", &TextNode::synthetic("/* bundle */\n"), None, false).unwrap();
//! builder.append("main.js", "run();\n", None, false).unwrap();
//!
//! let map = builder.mapping().unwrap();
//! let found = map.original_position_for(2, 0).unwrap().unwrap();
//! assert_eq!(found.source, "main.js");
//! assert_eq!(found.position.line, 1);
//! ```

pub mod builder;
pub mod content;
pub mod error;
pub mod node;
pub mod offset;
pub mod record;
pub mod synthesizer;

// Re-export main types
pub use builder::{Builder, BuilderOptions};
pub use content::ContentAccumulator;
pub use error::{JoinError, JoinResult};
pub use joiner_source_map::{SourceMap, SourceMapError};
pub use node::{Node, TextNode, split_lines};
pub use offset::Offset;
pub use record::MappingRecord;
pub use synthesizer::{MappingSink, MappingSynthesizer};
