//! Error type shared across mdweave.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::budget::TokenCount;

/// Library-wide error type for mdweave operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A file already open on the current import branch was imported again.
    #[error("Circular import detected: {}", render_chain(.chain))]
    CircularImport { chain: Vec<PathBuf> },

    /// A file import resolved to a path that does not exist.
    #[error("Import not found: {payload} (resolved to {})", .resolved.display())]
    ImportNotFound { payload: String, resolved: PathBuf },

    /// An imported file exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", .path.display())]
    ImportRead { path: PathBuf, source: io::Error },

    /// A glob payload could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {details}")]
    InvalidGlob { pattern: String, details: String },

    /// A fetched URL could not be classified as markdown, JSON, or plain text.
    #[error(
        "Failed to import {url}: unsupported content type '{content_type}' (expected markdown, JSON, or plain text)"
    )]
    UnsupportedContentType { content_type: String, url: String },

    /// The request could not be completed (DNS, connection, body read).
    #[error("Failed to fetch {url}: {details}")]
    Network { url: String, details: String },

    /// The server answered with a non-success status.
    #[error("Failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The shell for an inline command could not be spawned.
    #[error("Failed to execute command '{command}': {details}")]
    CommandLaunch { command: String, details: String },

    /// Expanded content is larger than the hard token limit.
    #[error(
        "Expanded content is ~{tokens} tokens, which exceeds the {limit} token limit. Set {override_var}=1 to proceed anyway."
    )]
    TokenBudgetExceeded { tokens: TokenCount, limit: TokenCount, override_var: &'static str },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

fn render_chain(chain: &[PathBuf]) -> String {
    chain.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(" -> ")
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
