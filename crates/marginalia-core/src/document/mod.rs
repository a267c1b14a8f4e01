//! Document text with edit-stable markers
//!
//! A [`Document`] owns its text and an arena of markers. A marker tracks a
//! byte offset across every edit made through [`Document::replace`]:
//! markers after the edited range shift by the length delta, markers strictly
//! inside the range collapse to its start, markers at or before its start stay
//! put. Insertion at a marker's own position leaves the marker in front of
//! the inserted text.

use std::fmt;
use std::ops::Range;

use serde::Serialize;
use tracing::trace;

use crate::bail_invalid;
use crate::error::Result;

/// Stable handle to a position inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MarkerId(usize);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Replace `range` of `text` with `replacement`, returning the new text.
///
/// `range` must lie inside `text` and on char boundaries.
pub fn splice(text: &str, range: Range<usize>, replacement: &str) -> Result<String> {
    check_range(text, &range)?;

    let mut out = String::with_capacity(text.len() - range.len() + replacement.len());
    out.push_str(&text[..range.start]);
    out.push_str(replacement);
    out.push_str(&text[range.end..]);
    Ok(out)
}

fn check_range(text: &str, range: &Range<usize>) -> Result<()> {
    if range.start > range.end || text.get(range.clone()).is_none() {
        bail_invalid!("range", format!("{}..{}", range.start, range.end));
    }
    Ok(())
}

/// An editable document and its live markers
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    markers: Vec<Option<usize>>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markers: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Create a new marker at `offset`
    pub fn marker(&mut self, offset: usize) -> Result<MarkerId> {
        if !self.text.is_char_boundary(offset) {
            bail_invalid!("offset", offset);
        }
        self.markers.push(Some(offset));
        Ok(MarkerId(self.markers.len() - 1))
    }

    /// Return a live marker sitting at `offset`, creating one if none exists
    pub fn marker_at(&mut self, offset: usize) -> Result<MarkerId> {
        let existing = self
            .markers
            .iter()
            .position(|slot| *slot == Some(offset));
        match existing {
            Some(index) => Ok(MarkerId(index)),
            None => self.marker(offset),
        }
    }

    /// Current offset of a marker, `None` once released
    pub fn resolve(&self, id: MarkerId) -> Option<usize> {
        self.markers.get(id.0).copied().flatten()
    }

    pub fn release(&mut self, id: MarkerId) {
        if let Some(slot) = self.markers.get_mut(id.0) {
            *slot = None;
        }
    }

    pub fn live_markers(&self) -> usize {
        self.markers.iter().flatten().count()
    }

    /// Replace `range` with `replacement` and move markers accordingly
    pub fn replace(&mut self, range: Range<usize>, replacement: &str) -> Result<()> {
        self.edit(range, replacement, false)
    }

    /// Like [`Document::replace`], but markers sitting at an empty `range`
    /// end up after the replacement instead of in front of it
    pub fn replace_before_markers(&mut self, range: Range<usize>, replacement: &str) -> Result<()> {
        self.edit(range, replacement, true)
    }

    fn edit(&mut self, range: Range<usize>, replacement: &str, push_markers: bool) -> Result<()> {
        self.text = splice(&self.text, range.clone(), replacement)?;

        let (start, end) = (range.start, range.end);
        for pos in self.markers.iter_mut().flatten() {
            let follows = *pos >= end && (push_markers || *pos > start);
            if follows {
                *pos = *pos - end + start + replacement.len();
            } else if *pos > start {
                *pos = start;
            }
        }

        trace!(start, end, inserted = replacement.len(), "document_replace");
        Ok(())
    }

    /// Insert `text` at `offset`
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<()> {
        self.replace(offset..offset, text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
