//! Occurrence list output, shared by `list` and `search`

pub mod human;
pub mod json;
pub mod records;

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use marginalia_core::error::Result;
use marginalia_core::scan::Occurrence;

/// What produced an occurrence list
pub struct Listing<'a> {
    pub file: &'a Path,
    /// Records header mode (`list` or `search`)
    pub mode: &'a str,
    /// Tags searched for, if any
    pub query: Option<&'a [String]>,
    pub empty_message: &'a str,
}

/// Print occurrences in the requested format
pub fn output(cli: &Cli, listing: &Listing<'_>, occurrences: &[Occurrence]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            human::output_human(cli, listing, occurrences);
            Ok(())
        }
        OutputFormat::Json => json::output_json(occurrences),
        OutputFormat::Records => {
            records::output_records(listing, occurrences);
            Ok(())
        }
    }
}
