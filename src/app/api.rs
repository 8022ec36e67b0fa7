//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and expansion.

use std::path::{Path, PathBuf};

use crate::app::{AppContext, Expander};
use crate::domain::{AppError, Directive, ExpandConfig, ImportStack, scan_all};
use crate::services::{HttpRemoteFetcher, ShellCommandRunner, StderrDiagnostics};

type ProductionContext = AppContext<HttpRemoteFetcher, ShellCommandRunner, StderrDiagnostics>;

/// Create an `AppContext` wired to the network, the shell, and stderr.
fn create_context(config: &ExpandConfig) -> Result<ProductionContext, AppError> {
    let fetcher = HttpRemoteFetcher::new(config)?;
    Ok(AppContext::new(fetcher, ShellCommandRunner::new(), StderrDiagnostics, config.clone()))
}

/// Expand a document on disk.
///
/// Imports resolve relative to the document's directory, and the document
/// itself counts as open for cycle detection.
pub fn expand_file(path: &Path, config: &ExpandConfig) -> Result<String, AppError> {
    let path = locate(path)?;
    let text = std::fs::read_to_string(&path)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("/"));

    let ctx = create_context(config)?;
    Expander::new(&ctx).expand_document(&text, &base_dir, &ImportStack::rooted_at(path))
}

/// Expand text that has no file of its own, resolving imports against `base_dir`.
pub fn expand_text(text: &str, base_dir: &Path, config: &ExpandConfig) -> Result<String, AppError> {
    let ctx = create_context(config)?;
    Expander::new(&ctx).expand_document(text, base_dir, &ImportStack::new())
}

/// List the directives in a document without resolving them.
pub fn scan_file(path: &Path) -> Result<Vec<Directive>, AppError> {
    let path = locate(path)?;
    Ok(scan_all(&std::fs::read_to_string(path)?))
}

fn locate(path: &Path) -> Result<PathBuf, AppError> {
    let absolute =
        if path.is_absolute() { path.to_path_buf() } else { std::env::current_dir()?.join(path) };
    if !absolute.is_file() {
        return Err(AppError::ImportNotFound {
            payload: path.display().to_string(),
            resolved: absolute,
        });
    }
    Ok(absolute.canonicalize()?)
}
