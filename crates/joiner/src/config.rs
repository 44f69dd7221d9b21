/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Join configuration loading
 */

//! Join configuration.
//!
//! A join can be described in a TOML file and/or on the command line.
//! Command-line values override the file; command-line inputs are
//! appended after the inputs listed in the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use joiner_core::BuilderOptions;
use serde::Deserialize;

/// One input of the join
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub path: PathBuf,
    /// Source name used in the map; defaults to `path`
    #[serde(default)]
    pub name: Option<String>,
    /// Map every line of this input to a single original line
    #[serde(default)]
    pub synthetic: bool,
    /// Restart original positions for this input's source
    #[serde(default)]
    pub reset: bool,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileEntry {
            path: path.into(),
            name: None,
            synthetic: false,
            reset: false,
        }
    }

    pub fn source_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.path.to_string_lossy().replace('\\', "/"),
        }
    }
}

/// Everything needed to run one join
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub source_map: BuilderOptions,
    /// Embed the text of every input in the map
    #[serde(default)]
    pub sources_content: bool,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub files: Vec<PathBuf>,
    pub synthetic: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub source_map: bool,
    pub source_root: Option<String>,
    pub sources_content: bool,
}

impl JoinConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid join configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Apply command-line values on top of this config
    pub fn merge(mut self, overrides: Overrides) -> Self {
        self.files
            .extend(overrides.files.into_iter().map(FileEntry::new));
        self.files.extend(overrides.synthetic.into_iter().map(|path| FileEntry {
            synthetic: true,
            ..FileEntry::new(path)
        }));

        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        if overrides.source_map {
            self.source_map.generate_mapping = true;
        }
        if overrides.source_root.is_some() {
            self.source_map.mapping_source_root = overrides.source_root;
        }
        self.sources_content |= overrides.sources_content;

        if self.source_map.mapping_file.is_none() {
            self.source_map.mapping_file = self
                .output
                .as_deref()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned());
        }
        self
    }

    /// Check that the config describes a runnable join
    pub fn validate(&self) -> Result<&Path> {
        let Some(output) = self.output.as_deref() else {
            bail!("No output file given (use --output or set `output` in the config)");
        };
        if self.files.is_empty() {
            bail!("No input files given");
        }
        Ok(output)
    }
}
