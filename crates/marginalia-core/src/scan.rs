//! Document scanner: recover every annotation occurrence in a scope

use std::ops::Range;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::document::{Document, MarkerId};
use crate::link::{annotation_links, AnnotationLink};
use crate::outline::Outline;
use crate::trace_time;

/// Display text for annotations that cover no text
pub const NO_TEXT_PLACEHOLDER: &str = "[no text]";

/// Region of the document a scan is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanScope {
    #[default]
    Whole,
    /// The section enclosing `anchor`, up to the next boundary at or above
    /// its level
    Subtree { anchor: usize },
}

impl ScanScope {
    /// Byte range this scope covers in `text`
    pub fn resolve(&self, text: &str, outline: &dyn Outline) -> Range<usize> {
        match *self {
            ScanScope::Whole => 0..text.len(),
            ScanScope::Subtree { anchor } => {
                let anchor = anchor.min(text.len());
                let start = outline.section_start(text, anchor);
                let end = outline.next_boundary(text, anchor).max(start);
                start..end
            }
        }
    }
}

/// One recovered annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Marker tracking the link start across edits
    pub id: MarkerId,
    /// Span at scan time; stale after any edit
    pub span: Range<usize>,
    pub display_text: String,
    pub note_path: String,
    pub label: Option<String>,
}

impl Occurrence {
    pub fn start(&self) -> usize {
        self.span.start
    }
}

/// Attach markers to located links, preserving their order
pub(crate) fn materialize(
    doc: &mut Document,
    found: Vec<(Range<usize>, AnnotationLink)>,
) -> Vec<Occurrence> {
    let mut out = Vec::with_capacity(found.len());
    for (span, link) in found {
        // Spans come from a scan of this same text, so the offset is valid
        let Ok(id) = doc.marker_at(span.start) else {
            continue;
        };
        out.push(Occurrence {
            id,
            display_text: link
                .label
                .clone()
                .unwrap_or_else(|| NO_TEXT_PLACEHOLDER.to_string()),
            span,
            note_path: link.note_path,
            label: link.label,
        });
    }
    out
}

/// Every annotation in `scope`, in document order
#[tracing::instrument(skip(doc, outline), fields(doc_len = doc.len()))]
pub fn scan(doc: &mut Document, outline: &dyn Outline, scope: ScanScope) -> Vec<Occurrence> {
    let start = Instant::now();
    let range = scope.resolve(doc.text(), outline);
    let found = annotation_links(doc.text(), range.clone());
    let occurrences = materialize(doc, found);

    debug!(
        range_start = range.start,
        range_end = range.end,
        occurrences = occurrences.len(),
        "scan"
    );
    trace_time!(start, "scan_complete");
    occurrences
}
