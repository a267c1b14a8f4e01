use crate::cli::support::{marginalia, write_doc};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Add command tests
// ============================================================================

#[test]
fn test_add_wraps_span() {
    let dir = tempdir().unwrap();
    let path = write_doc(&dir, "doc.org", "read this later\n");

    marginalia(dir.path())
        .args(["add", "doc.org", "--at", "5", "--len", "4", "--note", "#todo check"])
        .assert()
        .success()
        .stdout("5\n");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "read [[note:#todo check][this]] later\n"
    );
}

#[test]
fn test_add_escapes_brackets_and_percent() {
    let dir = tempdir().unwrap();
    let path = write_doc(&dir, "doc.org", "cite here\n");

    marginalia(dir.path())
        .args(["add", "doc.org", "--at", "0", "--len", "4", "-n", "see [1], 50%"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[[note:see %5B1%5D, 50%25][cite]] here\n"
    );

    marginalia(dir.path())
        .args(["list", "doc.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cite  :: see [1], 50%"));
}

#[test]
fn test_add_without_span_has_no_label() {
    let dir = tempdir().unwrap();
    let path = write_doc(&dir, "doc.org", "end.\n");

    marginalia(dir.path())
        .args(["add", "doc.org", "--at", "3", "--note", "margin"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "end[[note:margin]].\n");
}

#[test]
fn test_add_json_output() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", "abc\n");

    let output = marginalia(dir.path())
        .args(["--format", "json", "add", "doc.org", "--at", "0", "--len", "3", "-n", "x"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], 0);
    assert_eq!(json["link"], "[[note:x][abc]]");
}

#[test]
fn test_add_out_of_range_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = write_doc(&dir, "doc.org", "abc\n");

    marginalia(dir.path())
        .args(["add", "doc.org", "--at", "2", "--len", "10", "-n", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid range"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "abc\n");
}
