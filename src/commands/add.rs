//! `marginalia add` command - annotate a span
//!
//! Wraps `--len` bytes starting at `--at` in a new annotation (the span
//! becomes the label), or inserts a bare annotation when `--len` is 0.
//! The document is rewritten in place.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::document;
use marginalia_core::bail_invalid;
use marginalia_core::error::{MarginaliaError, Result};
use marginalia_core::link::parse_link_at;
use marginalia_core::mutate::insert_annotation;

/// Execute the add command
pub fn execute(cli: &Cli, file: &Path, at: usize, len: usize, note: &str) -> Result<()> {
    let mut doc = document::load(file)?;

    let Some(end) = at.checked_add(len) else {
        bail_invalid!("span length", len);
    };
    let id = insert_annotation(&mut doc, at..end, note)?;
    let start = doc
        .resolve(id)
        .ok_or_else(|| MarginaliaError::MarkerNotFound { id: id.to_string() })?;
    let link = parse_link_at(doc.text(), start)
        .map(|raw| doc.text()[raw.span].to_string())
        .unwrap_or_default();

    document::save(file, &doc)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", start);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": file.display().to_string(),
                "start": start,
                "link": link,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("A {} {}", start, link);
        }
    }

    Ok(())
}
