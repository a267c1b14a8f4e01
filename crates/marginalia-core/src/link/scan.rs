//! Generic bracketed-link scanning
//!
//! Recognizes `[[path]]` and `[[path][description]]`. Neither part may
//! contain a raw `[` or `]`; anything else, including line breaks, is
//! accepted. Unterminated or malformed constructs are simply not matched.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

static LINK_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn link_regex() -> Option<&'static Regex> {
    LINK_RE
        .get_or_init(|| match Regex::new(r"\[\[([^\[\]]+)\](?:\[([^\[\]]+)\])?\]") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile link regex");
                None
            }
        })
        .as_ref()
}

/// One bracketed link as it appears in the text (still escaped)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    pub path: String,
    pub description: Option<String>,
    /// Byte span of the whole construct, brackets included
    pub span: Range<usize>,
}

impl RawLink {
    fn from_captures(caps: &regex::Captures<'_>, base: usize) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            path: caps.get(1)?.as_str().to_string(),
            description: caps.get(2).map(|m| m.as_str().to_string()),
            span: base + whole.start()..base + whole.end(),
        })
    }
}

/// Every link lying entirely inside `range`, in source order
pub fn scan_links(text: &str, range: Range<usize>) -> Vec<RawLink> {
    let Some(re) = link_regex() else {
        return Vec::new();
    };
    let Some(slice) = text.get(range.clone()) else {
        return Vec::new();
    };

    re.captures_iter(slice)
        .filter_map(|caps| RawLink::from_captures(&caps, range.start))
        .collect()
}

/// The link starting exactly at `offset`, if any
pub fn parse_link_at(text: &str, offset: usize) -> Option<RawLink> {
    let re = link_regex()?;
    let rest = text.get(offset..)?;
    let caps = re.captures(rest)?;
    if caps.get(0)?.start() != 0 {
        return None;
    }
    RawLink::from_captures(&caps, offset)
}
