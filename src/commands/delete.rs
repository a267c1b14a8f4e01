//! `marginalia delete` command - remove an annotation
//!
//! The link starting at `--at` collapses back to its label text. Anything
//! other than an annotation link at that offset is a data error (exit 3)
//! and the file is left untouched.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::document;
use marginalia_core::error::Result;
use marginalia_core::mutate::delete_annotation_at;
use marginalia_core::records::escape_quotes;

/// Execute the delete command
pub fn execute(cli: &Cli, file: &Path, at: usize) -> Result<()> {
    let mut doc = document::load(file)?;
    let deletion = delete_annotation_at(&mut doc, at)?;
    document::save(file, &doc)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted note at {}: {}", at, deletion.link.note_path);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": file.display().to_string(),
                "start": deletion.span.start,
                "end": deletion.span.end,
                "replacement": deletion.replacement,
                "note": deletion.link.note_path,
                "label": deletion.link.label,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "D {} {} note=\"{}\"",
                deletion.span.start,
                deletion.span.end,
                escape_quotes(&deletion.link.note_path)
            );
        }
    }

    Ok(())
}
