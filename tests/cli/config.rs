use crate::cli::support::{marginalia, write_doc, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_config_dir_settings_apply() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", "x [[note:n][y]]\n");
    write_doc(
        &dir,
        "config.toml",
        "[export]\nlatex_style = \"footnote\"\nauthor = \"Ann\"\n",
    );

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", "latex"])
        .assert()
        .success()
        .stdout("x y\\footnote{n}\n");

    marginalia(dir.path())
        .args(["export", "doc.org", "--to", "odt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<dc:creator>Ann</dc:creator>"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);
    write_doc(&dir, "strict.toml", "[search]\ntag_match = \"token\"\n");

    marginalia(dir.path())
        .args(["--config", "strict.toml", "search", "doc.org", "-t", "to"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found for hashtag"));
}

#[test]
fn test_config_include_ambient_tags() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);
    write_doc(&dir, "config.toml", "[search]\ninclude_ambient_tags = true\n");

    marginalia(dir.path())
        .args(["search", "doc.org", "-t", "office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);
    write_doc(&dir, "config.toml", "[search]\ntag_match = \"fuzzy\"\n");

    marginalia(dir.path())
        .args(["list", "doc.org"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    write_doc(&dir, "doc.org", SAMPLE);

    marginalia(dir.path())
        .args(["--config", "nope.toml", "list", "doc.org"])
        .assert()
        .failure();
}
