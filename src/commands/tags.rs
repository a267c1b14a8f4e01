//! `marginalia tags` command - list the hashtag universe
//!
//! Tags are deduplicated across every given document, in first-seen order.
//! Directories are walked for `.org` files in file-name order.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::cli::{Cli, OutputFormat};
use crate::commands::document;
use marginalia_core::error::{MarginaliaError, Result};
use marginalia_core::hashtag::{collect_hashtags, TagSet};
use marginalia_core::outline::{OrgOutline, Outline};
use marginalia_core::records::escape_quotes;

const DOCUMENT_EXTENSION: &str = "org";

/// Expand directories into the documents they contain
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                MarginaliaError::io_operation("walk", path.display(), e)
            })?;
            if entry.file_type().is_file() && has_document_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

/// Execute the tags command
pub fn execute(cli: &Cli, paths: &[PathBuf], inherit: bool) -> Result<()> {
    let files = expand_paths(paths)?;
    let outline = OrgOutline;
    let ambient: Option<&dyn Outline> = if inherit { Some(&outline) } else { None };

    let mut tags = TagSet::new();
    for file in &files {
        let doc = document::load(file)?;
        tags.extend(collect_hashtags(doc.text(), ambient).into_vec());
    }
    debug!(files = files.len(), tags = tags.len(), "tags");

    match cli.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                if !cli.quiet {
                    println!("No hashtags found");
                }
                return Ok(());
            }
            for tag in &tags {
                println!("#{}", tag);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
        OutputFormat::Records => {
            println!(
                "H marginalia=1 records=1 mode=tags files={} results={}",
                files.len(),
                tags.len()
            );
            for tag in &tags {
                println!("T \"{}\"", escape_quotes(tag));
            }
        }
    }

    Ok(())
}
