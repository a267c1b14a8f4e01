//! `marginalia export` command - render annotations for a backend
//!
//! Prints the document with every annotation replaced by the configured
//! formatter output. Unknown formats print the bare labels.

use std::path::Path;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::document;
use marginalia_core::bail_usage;
use marginalia_core::config::Config;
use marginalia_core::error::Result;
use marginalia_core::export::{export_document, ExportConfig};

/// Execute the export command
pub fn execute(cli: &Cli, config: &Config, file: &Path, format: &str) -> Result<()> {
    let format = format.trim();
    if format.is_empty() {
        bail_usage!("export format cannot be empty");
    }

    let doc = document::load(file)?;
    let table = ExportConfig::from_settings(&config.export);
    if cli.verbose {
        debug!(format, known = ?table.formats(), "export");
    }

    print!("{}", export_document(doc.text(), &table, &format.to_lowercase()));
    Ok(())
}
