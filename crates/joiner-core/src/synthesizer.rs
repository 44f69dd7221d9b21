//! Mapping generation for appended nodes
//!
//! Two strategies exist. Explicit records supplied by the caller are
//! shifted into absolute output coordinates; their original side is taken
//! as given. Without records, one mapping per generated line is
//! synthesized from a per-file cursor that follows the node through its
//! source file.

use crate::error::{JoinError, JoinResult};
use crate::offset::{Offset, text_width};
use crate::record::MappingRecord;
use joiner_source_map::{Mapping, Position, SourceMapGenerator};

use std::collections::HashMap;

/// Destination for finalized mappings, in emission order
pub trait MappingSink {
    fn add_mapping(&mut self, mapping: Mapping) -> joiner_source_map::Result<()>;
}

impl MappingSink for SourceMapGenerator {
    fn add_mapping(&mut self, mapping: Mapping) -> joiner_source_map::Result<()> {
        SourceMapGenerator::add_mapping(self, mapping)
    }
}

impl MappingSink for Vec<Mapping> {
    fn add_mapping(&mut self, mapping: Mapping) -> joiner_source_map::Result<()> {
        self.push(mapping);
        Ok(())
    }
}

/// Per-file original-position cursors
#[derive(Debug, Clone, Default)]
pub struct MappingSynthesizer {
    file_offsets: HashMap<String, Offset>,
}

impl MappingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current original-position cursor for `filename`, if it has one
    pub fn file_offset(&self, filename: &str) -> Option<Offset> {
        self.file_offsets.get(filename).copied()
    }

    /// Emit caller-supplied records relative to the output cursor
    ///
    /// Only the first line of an append can start mid-line, so only
    /// records on line 1 are shifted by the cursor's column. Per-file
    /// cursors are not consulted or advanced.
    pub fn add_explicit<S: MappingSink + ?Sized>(
        sink: &mut S,
        content_offset: Offset,
        records: &[MappingRecord],
    ) -> JoinResult<()> {
        for record in records {
            let generated = Position::new(
                content_offset.line + record.generated_line,
                record.generated_column
                    + if record.generated_line == 1 {
                        content_offset.column
                    } else {
                        0
                    },
            );

            let mapping = match record.mapped_original_line() {
                Some(line) => Mapping {
                    generated,
                    original: Some(Position::new(line, record.original_column)),
                    source: Some(record.source.clone()),
                    name: record.name.clone(),
                },
                None => Mapping::generated_only(generated),
            };
            sink.add_mapping(mapping)?;
        }
        Ok(())
    }

    /// Synthesize one mapping per generated line of `lines`
    ///
    /// A trailing empty line is not mapped: it only marks that the node
    /// ended with a terminator, and the position it stands for belongs to
    /// whatever is appended next.
    ///
    /// With `frozen` set every line maps to the line after the file
    /// cursor and the cursor stays put; otherwise the cursor advances past
    /// `lines` so the next append of the same file continues from there.
    pub fn add_for_lines<S: MappingSink + ?Sized>(
        &mut self,
        sink: &mut S,
        content_offset: Offset,
        filename: &str,
        lines: &[&str],
        frozen: bool,
        reset: bool,
    ) -> JoinResult<()> {
        if reset {
            tracing::debug!(filename, "Resetting original offset");
            self.file_offsets
                .insert(filename.to_string(), Offset::default());
        }
        let file_offset = self
            .file_offsets
            .entry(filename.to_string())
            .or_default();

        let count = lines.len();
        for (idx, line) in lines.iter().enumerate() {
            let i = idx + 1;
            if i == count && line.is_empty() {
                continue;
            }

            let first = i == 1;
            let generated = Position::new(
                content_offset.line + i,
                if first { content_offset.column } else { 0 },
            );
            let original = Position::new(
                file_offset.line + if frozen { 1 } else { i },
                if first { file_offset.column } else { 0 },
            );
            sink.add_mapping(Mapping::new(generated, original, filename))?;
        }

        if !frozen {
            file_offset.advance(lines);
        }
        Ok(())
    }
}

/// Reject records that cannot be placed in the output
///
/// Each record must land on one of the node's `lines`, at or before the end
/// of that line.
pub fn validate_records(filename: &str, records: &[MappingRecord], lines: &[&str]) -> JoinResult<()> {
    for (index, record) in records.iter().enumerate() {
        let invalid = |reason: String| JoinError::InvalidMappingRecord {
            filename: filename.to_string(),
            index,
            reason,
        };

        if record.generated_line == 0 {
            return Err(invalid("generated line must be at least 1".to_string()));
        }
        let Some(line) = lines.get(record.generated_line - 1) else {
            return Err(invalid(format!(
                "generated line {} past the node's {} lines",
                record.generated_line,
                lines.len()
            )));
        };
        let width = text_width(line);
        if record.generated_column > width {
            return Err(invalid(format!(
                "generated column {} past the end of line {} ({} wide)",
                record.generated_column, record.generated_line, width
            )));
        }
    }
    Ok(())
}
