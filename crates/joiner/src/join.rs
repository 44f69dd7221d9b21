/*
 * join.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Join command implementation
 */

//! Reads the inputs, concatenates them and writes the output files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use joiner_core::{Builder, TextNode};
use tracing::{debug, info};

use crate::config::JoinConfig;

/// What a join produced
#[derive(Debug)]
pub struct JoinOutput {
    pub content: String,
    pub source_map: Option<String>,
}

/// Concatenate the inputs described by `config`
pub fn build(config: &JoinConfig) -> Result<JoinOutput> {
    let mut builder = Builder::new(config.source_map.clone());

    for entry in &config.files {
        let text = std::fs::read_to_string(&entry.path)
            .with_context(|| format!("Failed to read {}", entry.path.display()))?;
        let source = entry.source_name();
        debug!(source = %source, bytes = text.len(), synthetic = entry.synthetic, "Appending input");

        if config.sources_content && !entry.synthetic {
            builder.set_source_content(&source, text.as_str());
        }
        let node = if entry.synthetic {
            TextNode::synthetic(text)
        } else {
            TextNode::new(text)
        };
        builder
            .append(&source, &node, None, entry.reset)
            .with_context(|| format!("Failed to append {}", entry.path.display()))?;
    }

    Ok(JoinOutput {
        content: builder.content(),
        source_map: builder.mapping_string(),
    })
}

/// Path of the map written next to `output`
pub fn map_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".map");
    PathBuf::from(name)
}

/// The comment that points a consumer from the output to its map
pub fn source_mapping_url_comment(output: &Path, map_url: &str) -> String {
    let is_css = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"));
    if is_css {
        format!("/*# sourceMappingURL={} */", map_url)
    } else {
        format!("//# sourceMappingURL={}", map_url)
    }
}

/// Run the join and write the output (and map) to disk
pub fn execute(config: &JoinConfig) -> Result<()> {
    let output = config.validate()?;
    let JoinOutput {
        mut content,
        source_map,
    } = build(config)?;

    if let Some(map) = source_map {
        let map_file = map_path(output);
        let map_url = map_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&source_mapping_url_comment(output, &map_url));
        content.push('\n');

        write_file(&map_file, &map)?;
        info!(path = %map_file.display(), "Wrote source map");
    }

    write_file(output, &content)?;
    info!(path = %output.display(), inputs = config.files.len(), "Wrote output");
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
