//! Annotation creation and deletion
//!
//! Deleting an annotation collapses it back to its label. The removed span
//! covers the link plus any spaces or tabs directly after it; when there
//! were such blanks, a single space is put back after the label unless the
//! label already ends in whitespace. Label-less annotations vanish together
//! with their trailing blanks.

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::bail_invalid;
use crate::document::{Document, MarkerId};
use crate::error::{MarginaliaError, Result};
use crate::link::escape::collapse_newlines;
use crate::link::{parse_link_at, AnnotationLink};

/// What a deletion did to the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deletion {
    /// Removed range, trailing blanks included
    pub span: Range<usize>,
    pub replacement: String,
    pub link: AnnotationLink,
}

/// Work out how the annotation starting at `offset` would be deleted
pub fn plan_deletion(text: &str, offset: usize) -> Result<Deletion> {
    let not_annotation = || MarginaliaError::NotAnAnnotation { offset };

    let raw = parse_link_at(text, offset).ok_or_else(not_annotation)?;
    let link = AnnotationLink::from_raw(&raw).ok_or_else(not_annotation)?;

    let post_blank = text[raw.span.end..]
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    let replacement = match &link.label {
        Some(label) => {
            let mut out = label.clone();
            if post_blank > 0 && !out.ends_with(char::is_whitespace) {
                out.push(' ');
            }
            out
        }
        None => String::new(),
    };

    Ok(Deletion {
        span: raw.span.start..raw.span.end + post_blank,
        replacement,
        link,
    })
}

/// Delete the annotation a marker points at
#[tracing::instrument(skip(doc))]
pub fn delete_annotation(doc: &mut Document, id: MarkerId) -> Result<Deletion> {
    let offset = doc
        .resolve(id)
        .ok_or_else(|| MarginaliaError::MarkerNotFound { id: id.to_string() })?;
    let deletion = delete_annotation_at(doc, offset)?;
    doc.release(id);
    Ok(deletion)
}

/// Delete the annotation starting at a plain offset snapshot
#[tracing::instrument(skip(doc))]
pub fn delete_annotation_at(doc: &mut Document, offset: usize) -> Result<Deletion> {
    let deletion = plan_deletion(doc.text(), offset)?;
    doc.replace(deletion.span.clone(), &deletion.replacement)?;
    debug!(
        start = deletion.span.start,
        end = deletion.span.end,
        labelled = deletion.link.label.is_some(),
        "delete_annotation"
    );
    Ok(deletion)
}

/// Wrap `range` in a new annotation, or insert a label-less one at
/// `range.start` when the range is empty.
///
/// The new link always gets a fresh marker. On an empty range, markers
/// already sitting at `range.start` keep tracking the text after the link.
#[tracing::instrument(skip(doc, note_path))]
pub fn insert_annotation(
    doc: &mut Document,
    range: Range<usize>,
    note_path: &str,
) -> Result<MarkerId> {
    let Some(selected) = doc.text().get(range.clone()) else {
        bail_invalid!("range", format!("{}..{}", range.start, range.end));
    };
    let link = AnnotationLink::new(note_path, Some(collapse_newlines(selected)));
    let encoded = link.encode();

    doc.replace_before_markers(range.clone(), &encoded)?;
    let id = doc.marker(range.start)?;
    debug!(start = range.start, len = encoded.len(), "insert_annotation");
    Ok(id)
}
