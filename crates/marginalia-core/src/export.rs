//! Export adapter: render annotations for an output backend
//!
//! Formatters are looked up in an explicit table keyed by format identifier.
//! The default table is built from [`ExportSettings`]; callers may register
//! their own entries. Unknown formats degrade to the bare label.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::config::{ExportSettings, LatexStyle};
use crate::link::annotation_links;

/// `(note, label) -> rendered text`
pub type Formatter = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Table of per-format formatters
#[derive(Clone, Default)]
pub struct ExportConfig {
    formatters: HashMap<String, Formatter>,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("formats", &self.formats())
            .finish()
    }
}

impl ExportConfig {
    /// An empty table: every format falls back to the label
    pub fn empty() -> Self {
        Self::default()
    }

    /// The `html`, `latex` and `odt` formatters configured by `settings`
    pub fn from_settings(settings: &ExportSettings) -> Self {
        let mut config = Self::empty();

        let class = settings.html_class.clone();
        let marker = settings.empty_label_marker.clone();
        config.register("html", move |note, label| {
            html_tooltip(note, label, &class, &marker)
        });

        let style = settings.latex_style;
        config.register("latex", move |note, label| latex_note(note, label, style));

        let author = settings.author.clone();
        config.register("odt", move |note, label| {
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            odt_annotation(note, label, &author, &timestamp)
        });

        config
    }

    /// Add or replace the formatter for `format`
    pub fn register<F>(&mut self, format: impl Into<String>, formatter: F) -> &mut Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.formatters.insert(format.into(), Arc::new(formatter));
        self
    }

    pub fn formatter(&self, format: &str) -> Option<&Formatter> {
        self.formatters.get(format)
    }

    /// Registered format identifiers, sorted
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }
}

/// Render one annotation for `format`; unknown formats yield `label`
pub fn export_note(config: &ExportConfig, note: &str, label: &str, format: &str) -> String {
    match config.formatter(format) {
        Some(formatter) => formatter(note, label),
        None => {
            debug!(format, "no export formatter registered, using label");
            label.to_string()
        }
    }
}

/// Rewrite every annotation link in `text` through [`export_note`]
pub fn export_document(text: &str, config: &ExportConfig, format: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    let links = annotation_links(text, 0..text.len());
    let count = links.len();

    for (span, link) in links {
        out.push_str(&text[last_end..span.start]);
        out.push_str(&export_note(
            config,
            &link.note_path,
            link.label.as_deref().unwrap_or(""),
            format,
        ));
        last_end = span.end;
    }
    out.push_str(&text[last_end..]);

    debug!(format, annotations = count, "export_document");
    out
}

/// Escape text for HTML/XML content and attribute values
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape LaTeX special characters
pub fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Inline marker with the note as its tooltip
pub fn html_tooltip(note: &str, label: &str, class: &str, empty_marker: &str) -> String {
    let visible = if label.is_empty() { empty_marker } else { label };
    format!(
        r#"<span class="{}" title="{}">{}</span>"#,
        escape_markup(class),
        escape_markup(note),
        escape_markup(visible)
    )
}

pub fn latex_note(note: &str, label: &str, style: LatexStyle) -> String {
    let note = escape_latex(note);
    let label = escape_latex(label);
    match style {
        LatexStyle::Marginpar => format!(r"{label}\marginpar{{{note}}}"),
        LatexStyle::Todonote => format!(r"\todo{{{note}}}{label}"),
        LatexStyle::Footnote => format!(r"{label}\footnote{{{note}}}"),
        LatexStyle::Highlight => format!(r"\hl{{{label}}}\marginpar{{{note}}}"),
    }
}

/// ODF comment annotation followed by the label text
pub fn odt_annotation(note: &str, label: &str, author: &str, timestamp: &str) -> String {
    format!(
        "<office:annotation><dc:creator>{}</dc:creator><dc:date>{}</dc:date>\
         <text:p>{}</text:p></office:annotation>{}",
        escape_markup(author),
        escape_markup(timestamp),
        escape_markup(note),
        escape_markup(label)
    )
}
