//! Admission rules for remote content.
//!
//! Only markdown, JSON, and plain text may enter a document. A declared
//! content type on the allowlist is trusted; anything else must look like
//! markdown or JSON on inspection or it is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Content types admitted on the header alone.
pub const TEXTUAL_CONTENT_TYPES: &[&str] = &[
    "text/markdown",
    "text/x-markdown",
    "text/plain",
    "application/json",
    "application/ld+json",
];

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s").expect("valid regex"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:[-*+]|\d+\.)\s").expect("valid regex"));

/// Result of the admission decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Accepted { text: String },
    Rejected { content_type: String },
}

/// Media type without parameters, lowercased (`Text/HTML; charset=utf-8` -> `text/html`).
pub fn base_media_type(header: &str) -> String {
    header.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

/// Decide whether a fetched body may be imported.
///
/// `url_path` is the path component of the request URL, used for
/// extension hints when the header is missing or not on the allowlist.
pub fn admit(content_type: Option<&str>, url_path: &str, body: &str) -> Admission {
    let declared = content_type.map(base_media_type).filter(|t| !t.is_empty());
    let allowlisted = declared.as_deref().is_some_and(|t| TEXTUAL_CONTENT_TYPES.contains(&t));

    if allowlisted || looks_textual(url_path, body) {
        Admission::Accepted { text: body.trim().to_string() }
    } else {
        Admission::Rejected { content_type: declared.unwrap_or_else(|| "unknown".into()) }
    }
}

/// Inference for bodies whose header did not settle the question.
fn looks_textual(url_path: &str, body: &str) -> bool {
    let trimmed = body.trim();
    if trimmed.contains('\0') || looks_like_html(trimmed) {
        return false;
    }
    if looks_like_json(trimmed) {
        return true;
    }

    let path = url_path.to_ascii_lowercase();
    if [".md", ".markdown", ".json"].iter().any(|ext| path.ends_with(ext)) {
        return true;
    }

    looks_like_markdown(trimmed)
}

fn looks_like_json(trimmed: &str) -> bool {
    let wrapped = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    wrapped && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

fn looks_like_markdown(trimmed: &str) -> bool {
    HEADING.is_match(trimmed) || LIST_ITEM.is_match(trimmed) || trimmed.contains("```")
}

fn looks_like_html(trimmed: &str) -> bool {
    let head: String = trimmed.chars().take(64).collect::<String>().to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html") || head.starts_with("<?xml")
}
