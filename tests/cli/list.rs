use crate::cli::support::{marginalia, offset_of, write_doc, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_empty_document() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "empty.org", "* Nothing here\nplain text\n");

    marginalia(dir.path())
        .args(["list", "empty.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_list_in_source_order() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    let output = marginalia(dir.path())
        .args(["list", "doc.org"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Bob  :: #todo #phone ring Bob"));
    assert!(lines[1].contains("the paper  :: #todo #reading"));
    assert!(lines[2].contains("[no text]  :: plain remark"));
    assert!(lines[3].contains("the sink"));
}

#[test]
fn test_list_section_scope() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);
    let inside_home = offset_of(SAMPLE, "Fix");

    marginalia(dir.path())
        .args(["list", "doc.org", "--section", &inside_home.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("the sink"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn test_list_json_format() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    let output = marginalia(dir.path())
        .args(["--format", "json", "list", "doc.org"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["text"], "Bob");
    assert_eq!(items[0]["note"], "#todo #phone ring Bob");
    assert_eq!(items[0]["tags"], serde_json::json!(["todo", "phone"]));
    assert_eq!(items[2]["text"], "[no text]");
    assert!(items[2]["label"].is_null());
    assert_eq!(
        items[0]["start"].as_u64().unwrap() as usize,
        offset_of(SAMPLE, "[[note:#todo #phone")
    );
}

#[test]
fn test_list_records_format() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--format", "records", "list", "doc.org"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H marginalia=1 records=1 file=\"doc.org\" mode=list results=4",
        ))
        .stdout(predicate::str::contains("\"[no text]\" note=\"plain remark\" tags=-"))
        .stdout(predicate::str::contains("tags=todo,phone"));
}

#[test]
fn test_list_decodes_escaped_note() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", "x [[note:see %5B1%5D 50%25][cite]] y\n");

    marginalia(dir.path())
        .args(["list", "doc.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cite  :: see [1] 50%"));
}

#[test]
fn test_list_ignores_other_links() {
    let dir = tempdir().unwrap();
    write_doc(
        &dir,
        "doc.org",
        "[[file:other.org][elsewhere]] and [[https://example.com]]\n",
    );

    marginalia(dir.path())
        .args(["list", "doc.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_list_missing_file_fails() {
    let dir = tempdir().unwrap();

    marginalia(dir.path())
        .args(["list", "missing.org"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.org"));
}
