use crate::cli::support::{marginalia, write_doc, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--log-level", "debug", "list", "doc.org"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_document"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--log-level", "warn", "list", "doc.org"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_document").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--verbose", "search", "doc.org", "-t", "todo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("list_by_hashtags"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--log-level", "debug", "--log-json", "list", "doc.org"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_env_filter_overrides_flags() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .env("MARGINALIA_LOG", "off")
        .args(["--log-level", "debug", "list", "doc.org"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
