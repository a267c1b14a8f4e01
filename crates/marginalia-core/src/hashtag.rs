//! Hashtag extraction from annotation notes
//!
//! A hashtag is `#` followed by one or more characters other than
//! whitespace, `,` and `%`. Matches never overlap: each search resumes after
//! the previous match, so `#ab #a` yields `ab` then `a`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::link::annotation_links;
use crate::outline::Outline;

static HASHTAG_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn hashtag_regex() -> Option<&'static Regex> {
    HASHTAG_RE
        .get_or_init(|| match Regex::new(r"#([^\s,%]+)") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile hashtag regex");
                None
            }
        })
        .as_ref()
}

/// Hashtags in `note`, in order of appearance (duplicates kept)
pub fn extract_hashtags(note: &str) -> Vec<String> {
    let Some(re) = hashtag_regex() else {
        return Vec::new();
    };
    re.captures_iter(note)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Deduplicated tags in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag; returns `false` if it was already present
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.seen.contains(&tag) {
            return false;
        }
        self.seen.insert(tag.clone());
        self.tags.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Every hashtag used by any annotation in the whole document.
///
/// With `ambient`, the inherited tags of each annotation's context are merged
/// in after that annotation's own hashtags.
pub fn collect_hashtags(text: &str, ambient: Option<&dyn Outline>) -> TagSet {
    let links = annotation_links(text, 0..text.len());
    let inherited = match ambient {
        Some(outline) => {
            let positions: Vec<usize> = links.iter().map(|(span, _)| span.start).collect();
            outline.ambient_tags_at(text, &positions)
        }
        None => Vec::new(),
    };

    let mut set = TagSet::new();
    for (i, (_, link)) in links.iter().enumerate() {
        set.extend(extract_hashtags(&link.note_path));
        if let Some(tags) = inherited.get(i) {
            set.extend(tags.iter().cloned());
        }
    }
    debug!(tags = set.len(), "collect_hashtags");
    set
}
