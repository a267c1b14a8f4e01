//! Human-readable output formatting for occurrence lists

use super::Listing;
use crate::cli::Cli;
use marginalia_core::scan::Occurrence;

/// Output in human-readable format
pub fn output_human(cli: &Cli, listing: &Listing<'_>, occurrences: &[Occurrence]) {
    if occurrences.is_empty() {
        if !cli.quiet {
            println!("{}", listing.empty_message);
        }
        return;
    }

    for occ in occurrences {
        println!("{}", format_line(occ));
    }
}

fn format_line(occ: &Occurrence) -> String {
    format!("{:>6}  {}  :: {}", occ.start(), occ.display_text, occ.note_path)
}
