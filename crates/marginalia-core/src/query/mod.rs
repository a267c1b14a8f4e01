//! Query engine: listing and hashtag search over scanned annotations

pub mod filter;

use std::time::Instant;

use tracing::debug;

pub use self::filter::{augment_note, TagFilter, TagMatch};
use crate::document::Document;
use crate::error::{MarginaliaError, Result};
use crate::link::annotation_links;
use crate::outline::Outline;
use crate::scan::{materialize, scan, Occurrence, ScanScope};
use crate::{bail_invalid, trace_time};

/// All annotations in `scope`
pub fn list_all(doc: &mut Document, outline: &dyn Outline, scope: ScanScope) -> Vec<Occurrence> {
    scan(doc, outline, scope)
}

/// Annotations in `scope` carrying every tag of `filter`, in document order.
///
/// An empty tag list is rejected; an empty result is not an error.
#[tracing::instrument(skip(doc, outline, filter), fields(tags = ?filter.tags, mode = %filter.mode))]
pub fn list_by_hashtags(
    doc: &mut Document,
    outline: &dyn Outline,
    scope: ScanScope,
    filter: &TagFilter<'_>,
) -> Result<Vec<Occurrence>> {
    if filter.tags.is_empty() {
        return Err(MarginaliaError::EmptyTagQuery);
    }
    if let Some(blank) = filter.tags.iter().find(|t| t.trim().is_empty()) {
        bail_invalid!("hashtag", format!("{blank:?}"));
    }

    let start = Instant::now();
    let text = doc.text();
    let range = scope.resolve(text, outline);

    let links = annotation_links(text, range);
    let ambient = if filter.include_ambient {
        let positions: Vec<usize> = links.iter().map(|(span, _)| span.start).collect();
        outline.ambient_tags_at(text, &positions)
    } else {
        Vec::new()
    };

    let found: Vec<_> = links
        .into_iter()
        .enumerate()
        .filter(|(i, (_, link))| match ambient.get(*i) {
            Some(tags) => filter.matches(&augment_note(&link.note_path, tags)),
            None => filter.matches(&link.note_path),
        })
        .map(|(_, found)| found)
        .collect();

    let occurrences = materialize(doc, found);
    debug!(matches = occurrences.len(), "list_by_hashtags");
    trace_time!(start, "query_complete");
    Ok(occurrences)
}
