//! Incremental construction of revision 3 source maps

use crate::error::{Result, SourceMapError};
use crate::sourcemap::SourceMap;
use crate::types::Mapping;
use crate::vlq;

use std::collections::HashMap;

/// Ordered set of strings, indexed by first insertion
#[derive(Debug, Clone, Default)]
struct IndexedSet {
    items: Vec<String>,
    index: HashMap<String, usize>,
}

impl IndexedSet {
    fn insert(&mut self, item: &str) -> usize {
        if let Some(&idx) = self.index.get(item) {
            return idx;
        }
        let idx = self.items.len();
        self.items.push(item.to_string());
        self.index.insert(item.to_string(), idx);
        idx
    }

    fn get(&self, item: &str) -> Option<usize> {
        self.index.get(item).copied()
    }
}

/// Collects mappings and serializes them into a [`SourceMap`]
///
/// Sources and names are numbered in the order they are first seen.
/// Mappings may be added in any order; they are sorted by generated
/// position when the map is produced.
#[derive(Debug, Clone, Default)]
pub struct SourceMapGenerator {
    file: Option<String>,
    source_root: Option<String>,
    sources: IndexedSet,
    names: IndexedSet,
    mappings: Vec<Mapping>,
    sources_content: HashMap<String, String>,
}

impl SourceMapGenerator {
    /// Create a generator
    ///
    /// Empty strings for `file` or `source_root` are treated as absent.
    pub fn new(file: Option<String>, source_root: Option<String>) -> Self {
        SourceMapGenerator {
            file: file.filter(|f| !f.is_empty()),
            source_root: source_root.filter(|r| !r.is_empty()),
            ..Default::default()
        }
    }

    /// Validate and record a mapping
    ///
    /// A mapping with an original position must name its source and use a
    /// 1-indexed original line. A generated-only mapping may carry neither a
    /// source nor a name.
    pub fn add_mapping(&mut self, mapping: Mapping) -> Result<()> {
        validate(&mapping)?;

        if let Some(source) = &mapping.source {
            self.sources.insert(source);
        }
        if let Some(name) = &mapping.name {
            self.names.insert(name);
        }
        self.mappings.push(mapping);
        Ok(())
    }

    /// Attach the full text of an original source
    ///
    /// The source is registered if it has not been seen yet, so content can
    /// be set before or after its mappings are added.
    pub fn set_source_content(&mut self, source: &str, content: impl Into<String>) {
        self.sources.insert(source);
        self.sources_content.insert(source.to_string(), content.into());
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn sources(&self) -> &[String] {
        &self.sources.items
    }

    pub fn names(&self) -> &[String] {
        &self.names.items
    }

    /// Produce the source map for everything recorded so far
    pub fn to_source_map(&self) -> SourceMap {
        let sources_content = if self.sources_content.is_empty() {
            None
        } else {
            Some(
                self.sources
                    .items
                    .iter()
                    .map(|s| self.sources_content.get(s).cloned())
                    .collect(),
            )
        };

        SourceMap {
            version: 3,
            sources: self.sources.items.clone(),
            names: self.names.items.clone(),
            mappings: self.serialize_mappings(),
            file: self.file.clone(),
            source_root: self.source_root.clone(),
            sources_content,
        }
    }

    fn serialize_mappings(&self) -> String {
        let mut sorted: Vec<&Mapping> = self.mappings.iter().collect();
        sorted.sort_by_key(|m| m.generated);

        let mut out = String::new();
        let mut previous_generated_line = 1;
        let mut previous_generated_column = 0i64;
        let mut previous_original_line = 0i64;
        let mut previous_original_column = 0i64;
        let mut previous_source = 0i64;
        let mut previous_name = 0i64;
        let mut previous: Option<&Mapping> = None;

        for mapping in sorted {
            if mapping.generated.line != previous_generated_line {
                previous_generated_column = 0;
                while mapping.generated.line != previous_generated_line {
                    out.push(';');
                    previous_generated_line += 1;
                }
            } else if let Some(prev) = previous {
                if prev == mapping {
                    continue;
                }
                out.push(',');
            }
            previous = Some(mapping);

            let column = mapping.generated.column as i64;
            vlq::encode(column - previous_generated_column, &mut out);
            previous_generated_column = column;

            let (Some(original), Some(source)) = (mapping.original, &mapping.source) else {
                continue;
            };
            // Both sets were filled by add_mapping
            let source_idx = self.sources.get(source).unwrap_or_default() as i64;
            vlq::encode(source_idx - previous_source, &mut out);
            previous_source = source_idx;

            let original_line = original.line as i64 - 1;
            vlq::encode(original_line - previous_original_line, &mut out);
            previous_original_line = original_line;

            let original_column = original.column as i64;
            vlq::encode(original_column - previous_original_column, &mut out);
            previous_original_column = original_column;

            if let Some(name) = &mapping.name {
                let name_idx = self.names.get(name).unwrap_or_default() as i64;
                vlq::encode(name_idx - previous_name, &mut out);
                previous_name = name_idx;
            }
        }

        out
    }
}

fn validate(mapping: &Mapping) -> Result<()> {
    let invalid = |reason: &str| SourceMapError::InvalidMapping {
        generated: mapping.generated,
        reason: reason.to_string(),
    };

    if mapping.generated.line == 0 {
        return Err(invalid("generated line must be at least 1"));
    }

    match mapping.original {
        None if mapping.source.is_some() || mapping.name.is_some() => Err(invalid(
            "a mapping without an original position cannot carry a source or name",
        )),
        None => Ok(()),
        Some(_) if mapping.source.is_none() => {
            Err(invalid("a mapping with an original position needs a source"))
        }
        Some(original) if original.line == 0 => Err(invalid("original line must be at least 1")),
        Some(_) => Ok(()),
    }
}
