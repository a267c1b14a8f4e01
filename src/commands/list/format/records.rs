//! Records output formatting for occurrence lists

use super::Listing;
use marginalia_core::hashtag::extract_hashtags;
use marginalia_core::records::{escape_quotes, tags_field};
use marginalia_core::scan::Occurrence;

/// Output in records format
pub fn output_records(listing: &Listing<'_>, occurrences: &[Occurrence]) {
    let query = listing
        .query
        .map(|tags| format!(" query=\"{}\"", escape_quotes(&tags.join(","))))
        .unwrap_or_default();

    println!(
        "H marginalia=1 records=1 file=\"{}\" mode={}{} results={}",
        escape_quotes(&listing.file.display().to_string()),
        listing.mode,
        query,
        occurrences.len()
    );

    for occ in occurrences {
        println!(
            "N {} {} \"{}\" note=\"{}\" tags={}",
            occ.span.start,
            occ.span.end,
            escape_quotes(&occ.display_text),
            escape_quotes(&occ.note_path),
            tags_field(&extract_hashtags(&occ.note_path))
        );
    }
}
