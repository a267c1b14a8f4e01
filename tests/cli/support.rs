use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An outline with annotations under two sections
pub const SAMPLE: &str = "\
#+FILETAGS: :project:
* Work :office:
Call [[note:#todo #phone ring Bob][Bob]] today.
** Reading
Read [[note:#todo #reading][the paper]] and [[note:plain remark]] later.
* Home
Fix [[note:#todo #house leaky tap][the sink]] soon.
";

/// Get a Command for marginalia, isolated from the user's configuration
pub fn marginalia(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("marginalia");
    cmd.current_dir(dir)
        .env("MARGINALIA_CONFIG_DIR", dir)
        .env_remove("MARGINALIA_CONFIG")
        .env_remove("MARGINALIA_LOG");
    cmd
}

/// Write `content` to `name` inside `dir`
pub fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Byte offset of the first occurrence of `needle` in `haystack`
pub fn offset_of(haystack: &str, needle: &str) -> usize {
    haystack.find(needle).unwrap()
}
