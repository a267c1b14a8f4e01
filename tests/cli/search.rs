use crate::cli::support::{marginalia, offset_of, write_doc, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_single_tag() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    let output = marginalia(dir.path())
        .args(["search", "doc.org", "--tag", "todo"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(!stdout.contains("plain remark"));
}

#[test]
fn test_search_requires_every_tag() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "todo", "-t", "#reading"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the paper"))
        .stdout(predicate::str::contains("Bob").not())
        .stdout(predicate::str::contains("the sink").not());
}

#[test]
fn test_search_substring_matching_is_default() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "to"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("the sink"));
}

#[test]
fn test_search_exact_matches_whole_tokens() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "to", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found for hashtag"));
}

#[test]
fn test_search_inherit_uses_heading_tags() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found for hashtag"));

    let output = marginalia(dir.path())
        .args(["search", "doc.org", "-t", "office", "--inherit"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("Bob"));
    assert!(stdout.contains("[no text]"));
    assert!(!stdout.contains("the sink"));
}

#[test]
fn test_search_inherit_uses_file_tags() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    let output = marginalia(dir.path())
        .args(["search", "doc.org", "-t", "project", "-t", "todo", "--inherit"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 3);
}

#[test]
fn test_search_section_scope() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);
    let in_reading = offset_of(SAMPLE, "Read ");

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "todo", "--section"])
        .arg(in_reading.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("the paper"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn test_search_records_header_carries_query() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--format", "records", "search", "doc.org", "-t", "todo", "-t", "reading"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=search query=\"todo,reading\" results=1",
        ))
        .stdout(predicate::str::contains("\"the paper\""));
}

#[test]
fn test_search_json_empty_result_is_empty_array() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    let output = marginalia(dir.path())
        .args(["--format", "json", "search", "doc.org", "-t", "nothing"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!([]));
}

#[test]
fn test_search_without_tag_is_usage_error() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["search", "doc.org"])
        .assert()
        .code(2);
}

#[test]
fn test_search_rejects_malformed_tag() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "two words"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hashtag cannot contain"));

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "#"])
        .assert()
        .code(2);
}
