//! Tests for the joiner binary.

use std::path::Path;
use std::process::Command;

use joiner_core::SourceMap;
use pretty_assertions::assert_eq;

fn joiner() -> Command {
    Command::new(env!("CARGO_BIN_EXE_joiner"))
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_concatenates_without_map() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "var a;\n");
    write(dir.path(), "b.js", "var b;\n");

    let status = joiner()
        .current_dir(dir.path())
        .args(["a.js", "b.js", "-o", "out.js"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = std::fs::read_to_string(dir.path().join("out.js")).unwrap();
    assert_eq!(out, "var a;\nvar b;\n");
    assert!(!dir.path().join("out.js.map").exists());
}

#[test]
fn test_writes_source_map_and_comment() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "var a;\n");
    write(dir.path(), "b.js", "var b;");

    let status = joiner()
        .current_dir(dir.path())
        .args(["a.js", "b.js", "-o", "dist/out.js", "--source-map"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = std::fs::read_to_string(dir.path().join("dist/out.js")).unwrap();
    assert_eq!(out, "var a;\nvar b;\n//# sourceMappingURL=out.js.map\n");

    let map_json = std::fs::read_to_string(dir.path().join("dist/out.js.map")).unwrap();
    let map = SourceMap::from_json(&map_json).unwrap();
    assert_eq!(map.file.as_deref(), Some("out.js"));
    assert_eq!(map.sources, vec!["a.js", "b.js"]);
    assert_eq!(map.mappings, "AAAA;ACAA");
}

#[test]
fn test_config_file_with_synthetic_input() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "banner.css", "/* one */\n/* two */\n");
    write(dir.path(), "main.css", "a { color: red }\n");
    write(
        dir.path(),
        "joiner.toml",
        r#"
output = "out.css"
sourcesContent = true

[sourceMap]
generateMapping = true

[[files]]
path = "banner.css"
synthetic = true

[[files]]
path = "main.css"
"#,
    );

    let status = joiner()
        .current_dir(dir.path())
        .args(["--config", "joiner.toml"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = std::fs::read_to_string(dir.path().join("out.css")).unwrap();
    assert!(out.ends_with("/*# sourceMappingURL=out.css.map */\n"), "Got: {}", out);

    let map_json = std::fs::read_to_string(dir.path().join("out.css.map")).unwrap();
    let map = SourceMap::from_json(&map_json).unwrap();
    // Both banner lines map to its first line
    assert_eq!(map.mappings, "AAAA;AAAA;ACAA");
    assert_eq!(
        map.sources_content,
        Some(vec![None, Some("a { color: red }\n".to_string())])
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = joiner()
        .current_dir(dir.path())
        .args(["missing.js", "-o", "out.js"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.js"), "Got: {}", stderr);
}

#[test]
fn test_missing_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "x");

    let output = joiner()
        .current_dir(dir.path())
        .args(["a.js"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
