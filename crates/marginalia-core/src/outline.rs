//! Document structure lookups
//!
//! The scanner and query engine need two facts about the host document that
//! annotation links do not carry themselves: where the section around a
//! position ends, and which categorical tags that section inherits.
//! [`Outline`] abstracts both; [`OrgOutline`] reads Org-style headings:
//!
//! ```text
//! #+FILETAGS: :project:
//! * Heading                                :work:
//! ** Child heading                         :urgent:
//! ```

use serde::Serialize;

/// Structural lookups a host document provides
pub trait Outline {
    /// Start of the section enclosing `pos`
    fn section_start(&self, text: &str, pos: usize) -> usize;

    /// First structural boundary after `pos` at or above the level of the
    /// section enclosing `pos`; `text.len()` if there is none
    fn next_boundary(&self, text: &str, pos: usize) -> usize;

    /// Tags inherited by `pos` from its enclosing context, outermost first
    fn ambient_tags(&self, text: &str, pos: usize) -> Vec<String>;

    /// [`Outline::ambient_tags`] for many positions at once, in input order.
    ///
    /// Implementations should read the document structure once; callers
    /// pass positions in document order.
    fn ambient_tags_at(&self, text: &str, positions: &[usize]) -> Vec<Vec<String>> {
        positions
            .iter()
            .map(|&pos| self.ambient_tags(text, pos))
            .collect()
    }
}

/// A parsed heading line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: usize,
    /// Byte offset of the first star
    pub start: usize,
    pub title: String,
    pub tags: Vec<String>,
}

/// Org-style outline: `*`-prefixed headings with trailing `:tag:` groups
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgOutline;

impl OrgOutline {
    pub fn new() -> Self {
        Self
    }
}

/// All headings in `text`, in order
pub fn headings(text: &str) -> Vec<Heading> {
    let mut out = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if let Some((level, title, tags)) = parse_heading(content) {
            out.push(Heading {
                level,
                start: offset,
                title: title.to_string(),
                tags,
            });
        }
        offset += line.len();
    }
    out
}

fn parse_heading(line: &str) -> Option<(usize, &str, Vec<String>)> {
    let level = line.bytes().take_while(|b| *b == b'*').count();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    let (title, tags) = split_tags(rest.trim());
    Some((level, title, tags))
}

fn split_tags(rest: &str) -> (&str, Vec<String>) {
    let (head, last) = match rest.rfind([' ', '\t']) {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => ("", rest),
    };
    if is_tag_group(last) {
        (head.trim_end(), split_tag_group(last))
    } else {
        (rest, Vec::new())
    }
}

fn is_tag_group(s: &str) -> bool {
    s.len() > 2
        && s.starts_with(':')
        && s.ends_with(':')
        && s[1..s.len() - 1].split(':').all(|tag| {
            !tag.is_empty()
                && tag
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '_' | '@' | '#' | '%'))
        })
}

fn split_tag_group(s: &str) -> Vec<String> {
    s.split(':')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags declared by `#+FILETAGS:` lines
pub fn file_tags(text: &str) -> Vec<String> {
    const KEYWORD: &str = "#+filetags:";
    let mut tags = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let Some(head) = trimmed.get(..KEYWORD.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(KEYWORD) {
            continue;
        }
        for tag in trimmed[KEYWORD.len()..]
            .split(|c: char| c == ':' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            push_unique(&mut tags, tag);
        }
    }
    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

/// Enclosing-heading stack, advanced through ascending positions
struct Ancestry<'a> {
    all: &'a [Heading],
    next: usize,
    stack: Vec<&'a Heading>,
    last_pos: usize,
}

impl<'a> Ancestry<'a> {
    fn new(all: &'a [Heading]) -> Self {
        Self {
            all,
            next: 0,
            stack: Vec::new(),
            last_pos: 0,
        }
    }

    /// Headings enclosing `pos`, outermost first
    fn at(&mut self, pos: usize) -> &[&'a Heading] {
        if pos < self.last_pos {
            self.next = 0;
            self.stack.clear();
        }
        self.last_pos = pos;

        let all = self.all;
        while let Some(heading) = all.get(self.next).filter(|h| h.start <= pos) {
            while self.stack.last().is_some_and(|top| top.level >= heading.level) {
                self.stack.pop();
            }
            self.stack.push(heading);
            self.next += 1;
        }
        &self.stack
    }
}

impl Outline for OrgOutline {
    fn section_start(&self, text: &str, pos: usize) -> usize {
        headings(text)
            .iter()
            .take_while(|h| h.start <= pos)
            .last()
            .map_or(0, |h| h.start)
    }

    fn next_boundary(&self, text: &str, pos: usize) -> usize {
        let all = headings(text);
        let enclosing = all.iter().take_while(|h| h.start <= pos).last();
        let next = match enclosing {
            Some(current) => all
                .iter()
                .find(|h| h.start > current.start && h.level <= current.level),
            None => all.first(),
        };
        next.map_or(text.len(), |h| h.start)
    }

    fn ambient_tags(&self, text: &str, pos: usize) -> Vec<String> {
        self.ambient_tags_at(text, &[pos]).pop().unwrap_or_default()
    }

    fn ambient_tags_at(&self, text: &str, positions: &[usize]) -> Vec<Vec<String>> {
        let all = headings(text);
        let inherited = file_tags(text);
        let mut ancestry = Ancestry::new(&all);

        positions
            .iter()
            .map(|&pos| {
                let mut tags = inherited.clone();
                for heading in ancestry.at(pos) {
                    for tag in &heading.tags {
                        push_unique(&mut tags, tag);
                    }
                }
                tags
            })
            .collect()
    }
}
