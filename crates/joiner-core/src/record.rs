//! Caller-supplied mapping records

use serde::{Deserialize, Serialize};

/// An explicit mapping for part of a node's content
///
/// Generated positions are relative to the start of the append that
/// carries the record: `generated_line` 1 is the line the node starts on.
/// A record without an `original_line` covers output with no source
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    /// 1-indexed line within the appended node
    pub generated_line: usize,
    pub generated_column: usize,
    /// 1-indexed line in `source`; `None` or `0` means unmapped
    #[serde(default)]
    pub original_line: Option<usize>,
    #[serde(default)]
    pub original_column: usize,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MappingRecord {
    pub fn new(
        generated_line: usize,
        generated_column: usize,
        original_line: usize,
        original_column: usize,
        source: impl Into<String>,
    ) -> Self {
        MappingRecord {
            generated_line,
            generated_column,
            original_line: Some(original_line),
            original_column,
            source: source.into(),
            name: None,
        }
    }

    /// A record for generated bytes that have no original position
    pub fn unmapped(generated_line: usize, generated_column: usize, source: impl Into<String>) -> Self {
        MappingRecord {
            generated_line,
            generated_column,
            original_line: None,
            original_column: 0,
            source: source.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The original line, treating `0` the same as absent
    pub fn mapped_original_line(&self) -> Option<usize> {
        self.original_line.filter(|&line| line > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let records: Vec<MappingRecord> = serde_json::from_str(
            r#"[
                {"generatedLine": 1, "generatedColumn": 4, "originalLine": 3, "originalColumn": 2, "source": "a.js", "name": "foo"},
                {"generatedLine": 2, "generatedColumn": 0, "source": "a.js"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records[0], MappingRecord::new(1, 4, 3, 2, "a.js").with_name("foo"));
        assert_eq!(records[1], MappingRecord::unmapped(2, 0, "a.js"));
    }

    #[test]
    fn test_zero_original_line_is_unmapped() {
        let mut record = MappingRecord::new(1, 0, 0, 0, "a.js");
        assert_eq!(record.mapped_original_line(), None);
        record.original_line = Some(7);
        assert_eq!(record.mapped_original_line(), Some(7));
    }
}
