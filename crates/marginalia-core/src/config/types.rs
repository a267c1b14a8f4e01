//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::query::TagMatch;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hashtag search behavior
    #[serde(default)]
    pub search: SearchSettings,

    /// Export formatter settings
    #[serde(default)]
    pub export: ExportSettings,
}

/// Hashtag search behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Substring (loose) or token (exact) tag matching
    #[serde(default)]
    pub tag_match: TagMatch,

    /// Match against inherited section tags as well
    #[serde(default)]
    pub include_ambient_tags: bool,
}

/// LaTeX rendering variant for annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatexStyle {
    #[default]
    Marginpar,
    Todonote,
    Footnote,
    Highlight,
}

/// Export formatter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub latex_style: LatexStyle,

    /// Author recorded on ODT comments
    #[serde(default = "default_author")]
    pub author: String,

    /// CSS class of the HTML tooltip span
    #[serde(default = "default_html_class")]
    pub html_class: String,

    /// Visible HTML text for annotations without a label
    #[serde(default = "default_empty_label_marker")]
    pub empty_label_marker: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            latex_style: LatexStyle::default(),
            author: default_author(),
            html_class: default_html_class(),
            empty_label_marker: default_empty_label_marker(),
        }
    }
}

fn default_author() -> String {
    "Unknown Author".to_string()
}

fn default_html_class() -> String {
    "note-tooltip".to_string()
}

fn default_empty_label_marker() -> String {
    "†".to_string()
}
