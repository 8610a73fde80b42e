//! Integration tests: checking manifest files on disk against the built-in registry.

use nanomind::check::{check_all, check_manifest};
use nanomind_dsl::Registry;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const GOOD: &str = r#"
name = "ingest"

[nanites]
capacity = 3
template = "base"

[output]
stack = "null-out"

[[register]]
events = ["after_creation", "before_deletion"]
handlers = "noop"
"#;

#[test]
fn check_manifest_returns_summary() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "good.toml", GOOD);
    let summary = check_manifest(&path, &Registry::builtin()).unwrap();
    assert_eq!(summary.name, "ingest");
    assert_eq!(summary.capacity, Some(3));
    assert_eq!(summary.keep_alive, Some(false));
    assert!(summary.complete);
    assert_eq!(summary.handlers.len(), 2);
}

#[test]
fn check_all_reports_each_file() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.toml", GOOD);
    let bad = write(
        &dir,
        "bad.toml",
        r#"
name = "broken"
[[register]]
events = "whenever"
handlers = "noop"
"#,
    );
    let missing = dir.path().join("missing.toml");

    let reports = check_all(&[good, bad, missing], &Registry::builtin());
    assert_eq!(reports.len(), 3);

    assert!(reports[0].is_ok());
    assert!(reports[0].to_string().starts_with("ok   "));

    assert!(!reports[1].is_ok());
    assert!(reports[1].error.as_deref().unwrap().contains("Unknown event 'whenever'"));
    assert!(reports[1].to_string().starts_with("FAIL "));

    assert!(!reports[2].is_ok());
    assert!(reports[2].error.as_deref().unwrap().starts_with("io error"));
}

#[test]
fn incomplete_layer_is_reported_but_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bare.toml", r#"name = "bare""#);
    let reports = check_all(&[path], &Registry::builtin());
    assert!(reports[0].is_ok());
    assert!(reports[0].to_string().contains("incomplete"));
}

#[test]
fn reports_serialize_to_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "good.toml", GOOD);
    let reports = check_all(&[path], &Registry::builtin());
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["layer"]["name"], "ingest");
    assert_eq!(json[0]["layer"]["handlers"]["after_creation"], 1);
    assert!(json[0].get("error").is_none());
}
