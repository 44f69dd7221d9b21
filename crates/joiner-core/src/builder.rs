//! The public surface for building one output artifact

use crate::content::ContentAccumulator;
use crate::error::{JoinError, JoinResult};
use crate::node::Node;
use crate::offset::Offset;
use crate::record::MappingRecord;
use crate::synthesizer::{MappingSynthesizer, validate_records};
use joiner_source_map::{SourceMap, SourceMapGenerator};
use serde::{Deserialize, Serialize};

/// Options for a [`Builder`]
///
/// Deserializable so it can be embedded in configuration files; every
/// field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderOptions {
    /// Produce a source map alongside the content
    pub generate_mapping: bool,
    /// Value of the map's `file` field
    pub mapping_file: Option<String>,
    /// Value of the map's `sourceRoot` field
    pub mapping_source_root: Option<String>,
    /// Check that each node's lines reconstruct its content
    pub validate_nodes: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions {
            generate_mapping: false,
            mapping_file: None,
            mapping_source_root: None,
            validate_nodes: cfg!(debug_assertions),
        }
    }
}

impl BuilderOptions {
    /// Options with source map generation turned on
    pub fn with_mapping() -> Self {
        BuilderOptions {
            generate_mapping: true,
            ..Default::default()
        }
    }
}

/// Concatenates nodes into one output while tracking source positions
///
/// Appends are order sensitive: the output cursor and the per-file cursors
/// are running positions, so nodes must be appended in final output order.
///
/// # Example
///
/// ```rust
/// use joiner_core::{Builder, BuilderOptions, TextNode};
///
/// let mut builder = Builder::new(BuilderOptions::with_mapping());
/// builder.append("a.js", &TextNode::new("var a;\n"), None, false).unwrap();
/// builder.append("b.js", &TextNode::new("var b;\n"), None, false).unwrap();
///
/// assert_eq!(builder.content(), "var a;\nvar b;\n");
/// let map = builder.mapping().unwrap();
/// assert_eq!(map.sources, vec!["a.js", "b.js"]);
/// assert_eq!(map.mappings, "AAAA;ACAA");
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    validate_nodes: bool,
    content: ContentAccumulator,
    offset: Offset,
    synthesizer: MappingSynthesizer,
    generator: Option<SourceMapGenerator>,
}

impl Builder {
    pub fn new(options: BuilderOptions) -> Self {
        let generator = options
            .generate_mapping
            .then(|| SourceMapGenerator::new(options.mapping_file, options.mapping_source_root));

        Builder {
            validate_nodes: options.validate_nodes,
            content: ContentAccumulator::new(),
            offset: Offset::default(),
            synthesizer: MappingSynthesizer::new(),
            generator,
        }
    }

    /// Append a node produced from `filename`
    ///
    /// With `mappings` the node's own records are used; otherwise one
    /// mapping per line is synthesized, continuing from where the last
    /// append of `filename` left off unless `reset_file_offset` is set.
    ///
    /// A failed append leaves the builder unchanged.
    pub fn append<N: Node + ?Sized>(
        &mut self,
        filename: &str,
        node: &N,
        mappings: Option<&[MappingRecord]>,
        reset_file_offset: bool,
    ) -> JoinResult<()> {
        let lines = node.lines();
        if self.validate_nodes {
            check_node(filename, node, &lines)?;
        }
        if let Some(records) = mappings {
            validate_records(filename, records, &lines)?;
        }

        self.content.append(node.content());

        if let Some(generator) = self.generator.as_mut()
            && !lines.is_empty()
        {
            match mappings {
                Some(records) => {
                    tracing::trace!(
                        filename,
                        lines = lines.len(),
                        records = records.len(),
                        "Appending with explicit mappings"
                    );
                    MappingSynthesizer::add_explicit(generator, self.offset, records)?;
                }
                None => {
                    tracing::trace!(
                        filename,
                        lines = lines.len(),
                        "Appending with synthesized mappings"
                    );
                    self.synthesizer.add_for_lines(
                        generator,
                        self.offset,
                        filename,
                        &lines,
                        node.suppresses_per_line_mapping(),
                        reset_file_offset,
                    )?;
                }
            }
        }

        self.offset.advance(&lines);
        Ok(())
    }

    /// Embed the full text of an original source in the source map
    ///
    /// Does nothing when mapping generation is off.
    pub fn set_source_content(&mut self, source: &str, content: impl Into<String>) {
        if let Some(generator) = self.generator.as_mut() {
            generator.set_source_content(source, content);
        }
    }

    /// The concatenated output
    pub fn content(&self) -> String {
        self.content.joined_content()
    }

    /// The source map, or `None` if mapping generation is off
    pub fn mapping(&self) -> Option<SourceMap> {
        let map = self.generator.as_ref()?.to_source_map();
        tracing::debug!(
            sources = map.sources.len(),
            fragments = self.content.len(),
            "Produced source map"
        );
        Some(map)
    }

    /// The source map serialized as JSON, or `None` if mapping generation is off
    pub fn mapping_string(&self) -> Option<String> {
        self.mapping().map(|map| map.to_string())
    }

    pub fn generates_mapping(&self) -> bool {
        self.generator.is_some()
    }

    /// Output cursor: the line and column reached by [`Builder::content`]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Original-position cursor for `filename`
    pub fn file_offset(&self, filename: &str) -> Option<Offset> {
        self.synthesizer.file_offset(filename)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new(BuilderOptions::default())
    }
}

fn check_node<N: Node + ?Sized>(filename: &str, node: &N, lines: &[&str]) -> JoinResult<()> {
    if lines.join("\n") != node.content() {
        return Err(JoinError::InvalidNode {
            filename: filename.to_string(),
            reason: format!(
                "{} lines do not reconstruct {} bytes of content",
                lines.len(),
                node.content().len()
            ),
        });
    }
    Ok(())
}
