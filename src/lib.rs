//! mdweave: Expand file, URL, and shell-command imports in markdown documents.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{expand_file, expand_text, scan_file};
pub use app::{AppContext, Expander};
pub use domain::{
    AppError, Directive, DirectiveKind, ExpandConfig, FORCE_CONTEXT_ENV, ImportStack, TokenCount,
};
