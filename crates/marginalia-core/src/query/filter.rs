//! Hashtag filter for annotation queries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarginaliaError;
use crate::hashtag::extract_hashtags;

/// How a required tag is matched against a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatch {
    /// `"#" + tag` anywhere in the note; `a` also matches `#abc`
    #[default]
    Substring,
    /// `tag` must equal one of the note's hashtag tokens
    Token,
}

impl FromStr for TagMatch {
    type Err = MarginaliaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(TagMatch::Substring),
            "token" => Ok(TagMatch::Token),
            other => Err(MarginaliaError::invalid_value("tag match mode", other)),
        }
    }
}

impl fmt::Display for TagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagMatch::Substring => write!(f, "substring"),
            TagMatch::Token => write!(f, "token"),
        }
    }
}

/// Conjunctive hashtag filter
#[derive(Debug, Clone, Default)]
pub struct TagFilter<'a> {
    /// Every tag must match (AND)
    pub tags: &'a [String],
    pub mode: TagMatch,
    /// Append the enclosing context's inherited tags before matching
    pub include_ambient: bool,
}

impl<'a> TagFilter<'a> {
    pub fn new(tags: &'a [String]) -> Self {
        Self {
            tags,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: TagMatch) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ambient(mut self, include: bool) -> Self {
        self.include_ambient = include;
        self
    }

    /// Check a (possibly augmented) note against every required tag
    pub fn matches(&self, note: &str) -> bool {
        match self.mode {
            TagMatch::Substring => self
                .tags
                .iter()
                .all(|tag| note.contains(&format!("#{tag}"))),
            TagMatch::Token => {
                let tokens = extract_hashtags(note);
                self.tags.iter().all(|tag| tokens.contains(tag))
            }
        }
    }
}

/// Append inherited tags to a note as ` #t1,#t2 `
pub fn augment_note(note: &str, ambient: &[String]) -> String {
    if ambient.is_empty() {
        return note.to_string();
    }
    format!("{note} #{} ", ambient.join(",#"))
}
