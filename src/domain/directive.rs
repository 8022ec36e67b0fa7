//! Directive scanning and span replacement.
//!
//! Three directive forms are recognized:
//!
//! - `@./path`, `@../path`, `@~/path`, `@/path` import a file (or a glob of files)
//! - `@http://...`, `@https://...` import a remote document
//! - `` !`command` `` inlines the output of a shell command
//!
//! Scanning is pure: every call returns a fresh list of matches for the
//! snapshot it was given.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static FILE_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@((?:~|\.\.|\.)?/\S+)").expect("valid regex"));
static URL_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(https?://\S+)").expect("valid regex"));
static COMMAND_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!`([^`]+)`").expect("valid regex"));

/// The three directive forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    FileImport,
    UrlImport,
    CommandInline,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 3] =
        [DirectiveKind::FileImport, DirectiveKind::UrlImport, DirectiveKind::CommandInline];

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::FileImport => "file",
            DirectiveKind::UrlImport => "url",
            DirectiveKind::CommandInline => "command",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            DirectiveKind::FileImport => &FILE_IMPORT,
            DirectiveKind::UrlImport => &URL_IMPORT,
            DirectiveKind::CommandInline => &COMMAND_INLINE,
        }
    }
}

/// One directive occurrence in a text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Byte offset of the literal match.
    pub start: usize,
    /// Byte length of the literal match.
    pub len: usize,
    /// Captured path, URL, or command.
    pub payload: String,
}

impl Directive {
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Wildcard characters that turn a file payload into a glob.
pub fn is_glob_pattern(payload: &str) -> bool {
    payload.contains(['*', '?', '['])
}

/// Find every directive of `kind`, in ascending offset order.
pub fn scan(text: &str, kind: DirectiveKind) -> Vec<Directive> {
    kind.pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let payload = caps.get(1)?;
            Some(Directive {
                kind,
                start: whole.start(),
                len: whole.len(),
                payload: payload.as_str().to_string(),
            })
        })
        .collect()
}

/// Find every directive of every kind, in ascending offset order.
pub fn scan_all(text: &str) -> Vec<Directive> {
    let mut directives: Vec<Directive> =
        DirectiveKind::ALL.iter().flat_map(|kind| scan(text, *kind)).collect();
    directives.sort_by_key(|d| (d.start, d.len));
    directives
}

/// Replacement text for one span of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Range<usize>,
    pub text: String,
}

impl Replacement {
    pub fn new(span: Range<usize>, text: impl Into<String>) -> Self {
        Self { span, text: text.into() }
    }
}

/// Build a new string from `text` with each span swapped for its replacement.
///
/// Spans refer to the original snapshot and must not overlap. Order of the
/// input does not matter.
pub fn splice(text: &str, mut replacements: Vec<Replacement>) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }
    replacements.sort_by_key(|r| r.span.start);

    let added: usize = replacements.iter().map(|r| r.text.len()).sum();
    let mut out = String::with_capacity(text.len() + added);
    let mut cursor = 0;
    for replacement in &replacements {
        out.push_str(&text[cursor..replacement.span.start]);
        out.push_str(&replacement.text);
        cursor = replacement.span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
