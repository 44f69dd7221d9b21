//! Source map generation for concatenated output
//!
//! This crate builds and reads revision 3 source maps: the JSON artifact
//! that lets downstream tools translate positions in generated output
//! back to positions in the original files.
//!
//! # Overview
//!
//! The core types are:
//! - [`Mapping`]: One generated position and its optional original position
//! - [`SourceMapGenerator`]: Collects mappings and encodes them
//! - [`SourceMap`]: The serialized artifact, with decoding and lookup
//!
//! # Example
//!
//! ```rust
//! use joiner_source_map::*;
//!
//! let mut smg = SourceMapGenerator::new(Some("out.js".into()), None);
//! smg.add_mapping(Mapping::new(Position::new(1, 0), Position::new(1, 0), "a.js"))
//!     .unwrap();
//!
//! let map = smg.to_source_map();
//! assert_eq!(map.mappings, "AAAA");
//! assert_eq!(map.sources, vec!["a.js"]);
//! ```

pub mod consumer;
pub mod error;
pub mod generator;
pub mod sourcemap;
pub mod types;
pub mod vlq;

// Re-export main types
pub use consumer::{MappedLocation, find_original_position};
pub use error::{Result, SourceMapError};
pub use generator::SourceMapGenerator;
pub use sourcemap::SourceMap;
pub use types::{Mapping, Position};
