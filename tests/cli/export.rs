use crate::cli::support::{marginalia, write_doc};
use predicates::prelude::*;
use tempfile::tempdir;

const DOC: &str = "A [[note:#todo check][claim]] and [[note:aside]].\n";

// ============================================================================
// Export command tests
// ============================================================================

#[test]
fn test_export_html() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", DOC);

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", "html"])
        .assert()
        .success()
        .stdout(
            "A <span class=\"note-tooltip\" title=\"#todo check\">claim</span> and \
             <span class=\"note-tooltip\" title=\"aside\">†</span>.\n",
        );
}

#[test]
fn test_export_latex_escapes() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", DOC);

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", "latex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"claim\marginpar{\#todo check}"));
}

#[test]
fn test_export_odt() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", DOC);

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", "ODT"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<office:annotation><dc:creator>Unknown Author</dc:creator>",
        ))
        .stdout(predicate::str::contains("<text:p>#todo check</text:p></office:annotation>claim"));
}

#[test]
fn test_export_unknown_format_uses_labels() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", DOC);

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", "ascii"])
        .assert()
        .success()
        .stdout("A claim and .\n");
}

#[test]
fn test_export_empty_format_is_usage_error() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", DOC);

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", " "])
        .assert()
        .code(2);
}
