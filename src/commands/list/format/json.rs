//! JSON output formatting for occurrence lists

use marginalia_core::error::Result;
use marginalia_core::hashtag::extract_hashtags;
use marginalia_core::scan::Occurrence;

/// Build the JSON value for one occurrence
pub fn occurrence_json(occ: &Occurrence) -> serde_json::Value {
    serde_json::json!({
        "id": occ.id.to_string(),
        "start": occ.span.start,
        "end": occ.span.end,
        "text": occ.display_text,
        "label": occ.label,
        "note": occ.note_path,
        "tags": extract_hashtags(&occ.note_path),
    })
}

/// Output in JSON format
pub fn output_json(occurrences: &[Occurrence]) -> Result<()> {
    let output: Vec<_> = occurrences.iter().map(occurrence_json).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
