//! End-to-end tests for building content and source maps.

use joiner_core::{Builder, BuilderOptions, MappingRecord, Offset, SourceMap, TextNode, split_lines};
use joiner_source_map::{Mapping, Position};
use pretty_assertions::assert_eq;

fn mapping_builder() -> Builder {
    Builder::new(BuilderOptions {
        generate_mapping: true,
        validate_nodes: true,
        ..Default::default()
    })
}

fn decoded(builder: &Builder) -> Vec<Mapping> {
    builder.mapping().unwrap().decode_mappings().unwrap()
}

/// Every generated position must point at a real character position
fn assert_positions_inside(content: &str, mappings: &[Mapping]) {
    let lines = split_lines(content);
    for m in mappings {
        let line = lines
            .get(m.generated.line - 1)
            .unwrap_or_else(|| panic!("generated line {} past end of content", m.generated.line));
        assert!(
            m.generated.column <= line.encode_utf16().count(),
            "column {} past end of line {:?}",
            m.generated.column,
            line
        );
    }
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_content_is_plain_concatenation() {
    let parts = ["a\n", "", "b", "c\n\n", "d"];
    let mut builder = mapping_builder();
    for (i, part) in parts.iter().enumerate() {
        builder
            .append(&format!("f{}.js", i), *part, None, false)
            .unwrap();
    }
    assert_eq!(builder.content(), parts.concat());
}

#[test]
fn test_content_identical_with_mapping_off() {
    let mut with = mapping_builder();
    let mut without = Builder::new(BuilderOptions::default());
    for part in ["x\n", "y", "z\n"] {
        with.append("a.js", part, None, false).unwrap();
        without.append("a.js", part, None, false).unwrap();
    }
    assert_eq!(with.content(), without.content());
    assert!(without.mapping().is_none());
    assert!(without.mapping_string().is_none());
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn test_single_line_offset() {
    let mut builder = mapping_builder();
    builder.append("a.js", "abc", None, false).unwrap();
    assert_eq!(builder.offset(), Offset::new(0, 3));
}

#[test]
fn test_two_line_offset() {
    let mut builder = mapping_builder();
    builder.append("a.js", "abc\ndef", None, false).unwrap();
    assert_eq!(builder.offset(), Offset::new(1, 3));
}

#[test]
fn test_zero_line_node_leaves_offsets() {
    let mut builder = mapping_builder();
    builder.append("a.js", "one\ntw", None, false).unwrap();
    let global = builder.offset();
    let file = builder.file_offset("a.js");

    builder.append("a.js", "", None, false).unwrap();
    builder.append("a.js", "", None, true).unwrap();

    assert_eq!(builder.offset(), global);
    assert_eq!(builder.file_offset("a.js"), file);
}

// ============================================================================
// Synthesized mappings
// ============================================================================

#[test]
fn test_trailing_newline_yields_one_mapping() {
    let mut builder = mapping_builder();
    builder.append("a.js", "line1\n", None, false).unwrap();
    assert_eq!(
        decoded(&builder),
        vec![Mapping::new(Position::new(1, 0), Position::new(1, 0), "a.js")]
    );
}

#[test]
fn test_same_file_continues_original_lines() {
    let mut builder = mapping_builder();
    builder.append("a.js", "a1\na2\n", None, false).unwrap();
    builder.append("b.js", "b1\n", None, false).unwrap();
    builder.append("a.js", "a3\na4\n", None, false).unwrap();

    let a_lines: Vec<usize> = decoded(&builder)
        .iter()
        .filter(|m| m.source.as_deref() == Some("a.js"))
        .map(|m| m.original.unwrap().line)
        .collect();
    assert_eq!(a_lines, vec![1, 2, 3, 4]);
}

#[test]
fn test_reset_restarts_original_lines() {
    let mut builder = mapping_builder();
    builder.append("h.js", "h1\nh2\n", None, false).unwrap();
    builder.append("main.js", "m1\n", None, false).unwrap();
    builder.append("h.js", "h1\nh2\n", None, true).unwrap();

    let mappings = decoded(&builder);
    assert_eq!(
        mappings[3],
        Mapping::new(Position::new(4, 0), Position::new(1, 0), "h.js")
    );
    assert_eq!(
        mappings[4],
        Mapping::new(Position::new(5, 0), Position::new(2, 0), "h.js")
    );
}

#[test]
fn test_suppressed_node_shares_original_line() {
    let mut builder = mapping_builder();
    builder.append("a.js", "first\n", None, false).unwrap();
    builder
        .append("a.js", &TextNode::synthetic("s1\ns2\ns3\n"), None, false)
        .unwrap();

    let frozen: Vec<Mapping> = decoded(&builder).into_iter().skip(1).collect();
    assert_eq!(frozen.len(), 3);
    assert!(frozen.iter().all(|m| m.original == Some(Position::new(2, 0))));

    // The synthetic node did not move the file cursor
    assert_eq!(builder.file_offset("a.js"), Some(Offset::new(1, 0)));
}

#[test]
fn test_mid_line_append() {
    let mut builder = mapping_builder();
    builder.append("a.js", "abc", None, false).unwrap();
    builder.append("b.js", "de\nf", None, false).unwrap();

    assert_eq!(
        decoded(&builder),
        vec![
            Mapping::new(Position::new(1, 0), Position::new(1, 0), "a.js"),
            Mapping::new(Position::new(1, 3), Position::new(1, 0), "b.js"),
            Mapping::new(Position::new(2, 0), Position::new(2, 0), "b.js"),
        ]
    );
}

// ============================================================================
// Explicit mappings
// ============================================================================

#[test]
fn test_explicit_records_are_translated() {
    let mut builder = mapping_builder();
    builder.append("a.js", "prefix\nxx", None, false).unwrap();

    let records = vec![
        MappingRecord::new(1, 0, 10, 4, "lib.js"),
        MappingRecord::unmapped(1, 2, "lib.js"),
        MappingRecord::new(2, 1, 11, 0, "lib.js"),
    ];
    builder
        .append("lib.min.js", "f();\ng();\n", Some(records.as_slice()), false)
        .unwrap();

    let mappings = decoded(&builder);
    assert_eq!(
        &mappings[2..],
        &[
            Mapping::new(Position::new(2, 2), Position::new(10, 4), "lib.js"),
            Mapping::generated_only(Position::new(2, 4)),
            Mapping::new(Position::new(3, 1), Position::new(11, 0), "lib.js"),
        ]
    );

    // Explicit appends never touch per-file cursors
    assert!(builder.file_offset("lib.min.js").is_none());
    assert!(builder.file_offset("lib.js").is_none());
    assert_eq!(builder.offset(), Offset::new(3, 0));
}

#[test]
fn test_explicit_records_from_json() {
    let records: Vec<MappingRecord> = serde_json::from_str(
        r#"[{"generatedLine": 1, "generatedColumn": 0, "originalLine": 2, "originalColumn": 0, "source": "x.ts", "name": "run"}]"#,
    )
    .unwrap();

    let mut builder = mapping_builder();
    builder.append("x.js", "run()", Some(records.as_slice()), false).unwrap();

    let map = builder.mapping().unwrap();
    assert_eq!(map.names, vec!["run"]);
    let found = map.original_position_for(1, 3).unwrap().unwrap();
    assert_eq!(found.source, "x.ts");
    assert_eq!(found.position, Position::new(2, 0));
    assert_eq!(found.name.as_deref(), Some("run"));
}

// ============================================================================
// Whole artifact
// ============================================================================

fn bundle() -> Builder {
    let mut builder = Builder::new(BuilderOptions {
        generate_mapping: true,
        mapping_file: Some("bundle.js".to_string()),
        mapping_source_root: Some("/src".to_string()),
        validate_nodes: true,
    });
    builder
        .append("a.js", "var a = 1;\nvar b = 2;\n", None, false)
        .unwrap();
    builder
        .append(
            "inject",
            &TextNode::synthetic("/* injected */\n/* more */\n"),
            None,
            false,
        )
        .unwrap();
    let records = [
        MappingRecord::new(1, 0, 5, 2, "lib.js").with_name("c"),
        MappingRecord::unmapped(1, 3, "lib.js"),
    ];
    builder
        .append("c.js", "c();", Some(&records[..]), false)
        .unwrap();
    builder.append("a.js", "tail\n", None, false).unwrap();
    builder
}

#[test]
fn test_bundle_content() {
    assert_eq!(
        bundle().content(),
        "var a = 1;\nvar b = 2;\n/* injected */\n/* more */\nc();tail\n"
    );
}

#[test]
fn test_bundle_source_map_json() {
    insta::assert_snapshot!(
        bundle().mapping_string().unwrap(),
        @r#"{"version":3,"sources":["a.js","inject","lib.js"],"names":["c"],"mappings":"AAAA;AACA;ACDA;AAAA;ACIEA,G,CFFF","file":"bundle.js","sourceRoot":"/src"}"#
    );
}

#[test]
fn test_bundle_positions_are_inside_content() {
    let builder = bundle();
    assert_positions_inside(&builder.content(), &decoded(&builder));
}

#[test]
fn test_bundle_json_parses_back() {
    let builder = bundle();
    let parsed = SourceMap::from_json(&builder.mapping_string().unwrap()).unwrap();
    assert_eq!(parsed, builder.mapping().unwrap());
}

#[test]
fn test_sources_content_embedded() {
    let mut builder = mapping_builder();
    builder.append("a.js", "x\n", None, false).unwrap();
    builder.set_source_content("a.js", "x\n");

    let map = builder.mapping().unwrap();
    assert_eq!(map.sources_content, Some(vec![Some("x\n".to_string())]));
}

#[test]
fn test_builders_are_independent() {
    let mut first = mapping_builder();
    let mut second = mapping_builder();
    first.append("a.js", "1\n2\n", None, false).unwrap();
    second.append("a.js", "1\n", None, false).unwrap();

    assert_eq!(first.file_offset("a.js"), Some(Offset::new(2, 0)));
    assert_eq!(second.file_offset("a.js"), Some(Offset::new(1, 0)));
}
