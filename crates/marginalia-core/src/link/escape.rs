//! Link-path escaping
//!
//! Structural link characters are percent-encoded: `%` as `%25`, `[` as
//! `%5B`, `]` as `%5D`. Decoding accepts any `%XX` sequence and leaves
//! malformed ones as literal text.

const ESCAPED: [char; 3] = ['%', '[', ']'];

/// Percent-escape the characters that would terminate a bracketed link
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ESCAPED.contains(&c) {
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode `%XX` sequences; invalid UTF-8 is replaced lossily
pub fn unescape(s: &str) -> String {
    let decoded = urlencoding::decode_binary(s.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Collapse each run of line breaks into a single space
pub fn collapse_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_break = false;
    for c in s.chars() {
        if c == '\n' || c == '\r' {
            if !in_break {
                out.push(' ');
            }
            in_break = true;
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}
