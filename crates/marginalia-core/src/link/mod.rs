//! Annotation-link codec
//!
//! An annotation is a bracketed link whose path carries the reserved
//! `note:` prefix:
//!
//! ```text
//! [[note:<escaped note>]]
//! [[note:<escaped note>][<escaped label>]]
//! ```
//!
//! Canonical encodings never contain line breaks. Decoding tolerates raw
//! line breaks from hand-edited text and collapses them to spaces.

pub mod escape;
pub mod scan;

use std::ops::Range;

use serde::Serialize;

use self::escape::{collapse_newlines, escape, unescape};
pub use self::scan::{parse_link_at, scan_links, RawLink};

/// Reserved path prefix marking a link as an annotation
pub const NOTE_PREFIX: &str = "note:";

/// Decoded annotation fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationLink {
    pub note_path: String,
    pub label: Option<String>,
}

impl AnnotationLink {
    /// Build a link; an empty label is treated as no label
    pub fn new(note_path: impl Into<String>, label: Option<String>) -> Self {
        Self {
            note_path: note_path.into(),
            label: label.filter(|l| !l.is_empty()),
        }
    }

    /// Canonical inline form
    pub fn encode(&self) -> String {
        encode(&self.note_path, self.label.as_deref())
    }

    /// Interpret a generic link as an annotation, `None` for any other link
    pub fn from_raw(raw: &RawLink) -> Option<Self> {
        let body = raw.path.strip_prefix(NOTE_PREFIX)?;
        Some(Self {
            note_path: normalize(body),
            label: raw.description.as_deref().map(normalize),
        })
    }
}

fn normalize(raw: &str) -> String {
    collapse_newlines(&unescape(raw))
}

/// Encode a note and optional label as an inline annotation link
pub fn encode(note_path: &str, label: Option<&str>) -> String {
    let path = escape(&collapse_newlines(note_path));
    match label.filter(|l| !l.is_empty()) {
        Some(label) => format!(
            "[[{NOTE_PREFIX}{path}][{}]]",
            escape(&collapse_newlines(label))
        ),
        None => format!("[[{NOTE_PREFIX}{path}]]"),
    }
}

/// Decode one complete link construct; `None` unless `raw` is exactly one
/// annotation link
pub fn decode(raw: &str) -> Option<AnnotationLink> {
    let link = parse_link_at(raw, 0)?;
    if link.span.end != raw.len() {
        return None;
    }
    AnnotationLink::from_raw(&link)
}

/// Every annotation link lying inside `range`, paired with its span
pub fn annotation_links(text: &str, range: Range<usize>) -> Vec<(Range<usize>, AnnotationLink)> {
    scan_links(text, range)
        .into_iter()
        .filter_map(|raw| AnnotationLink::from_raw(&raw).map(|link| (raw.span, link)))
        .collect()
}
