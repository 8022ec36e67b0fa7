//! Recursive directive expansion.
//!
//! Each call runs three passes over its text: file imports, then URL
//! imports, then inline commands. Every pass scans the snapshot left by the
//! previous one, resolves its directives last-to-first, and splices all
//! replacements in one step against that snapshot.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use url::Url;

use crate::app::AppContext;
use crate::domain::{
    AppError, BudgetStatus, Directive, DirectiveKind, ImportStack, Replacement, TokenBudget,
    TokenCount, scan, splice,
};
use crate::ports::{CommandRunner, Diagnostics, RemoteFetcher};
use crate::services::{ResolvedImport, fetch_admitted};

/// Separator placed between files matched by one glob.
const GLOB_SEPARATOR: &str = "\n\n";

/// Drives one top-level expansion.
pub struct Expander<'a, F: RemoteFetcher, C: CommandRunner, D: Diagnostics> {
    ctx: &'a AppContext<F, C, D>,
    budget: TokenBudget,
    warned: Cell<bool>,
}

impl<'a, F: RemoteFetcher, C: CommandRunner, D: Diagnostics> Expander<'a, F, C, D> {
    pub fn new(ctx: &'a AppContext<F, C, D>) -> Self {
        Self { ctx, budget: TokenBudget::from_config(ctx.config()), warned: Cell::new(false) }
    }

    /// Expand `text` completely and apply the token budget to the result.
    ///
    /// `stack` holds the document's own path when it lives on disk.
    pub fn expand_document(
        &self,
        text: &str,
        base_dir: &Path,
        stack: &ImportStack,
    ) -> Result<String, AppError> {
        let expanded = self.expand(text, base_dir, stack)?;
        self.enforce_budget(self.budget.estimate(&expanded))?;
        Ok(expanded)
    }

    /// Expand all directives in `text`; relative imports resolve against `dir`.
    pub fn expand(&self, text: &str, dir: &Path, stack: &ImportStack) -> Result<String, AppError> {
        let text = self.expand_file_imports(text, dir, stack)?;
        let text = self.expand_url_imports(&text)?;
        self.expand_commands(&text, dir)
    }

    fn expand_file_imports(
        &self,
        text: &str,
        dir: &Path,
        stack: &ImportStack,
    ) -> Result<String, AppError> {
        self.replace_each(text, DirectiveKind::FileImport, |directive| {
            match self.ctx.resolver().resolve(&directive.payload, dir)? {
                ResolvedImport::File(path) => self.load_file(&path, stack),
                ResolvedImport::Glob(paths) => self.load_glob(&paths, stack),
            }
        })
    }

    fn expand_url_imports(&self, text: &str) -> Result<String, AppError> {
        self.replace_each(text, DirectiveKind::UrlImport, |directive| {
            let url = Url::parse(&directive.payload).map_err(|e| AppError::Network {
                url: directive.payload.clone(),
                details: format!("invalid URL: {}", e),
            })?;
            self.emit(&format!("Fetching: {}", url));
            fetch_admitted(self.ctx.fetcher(), &url)
        })
    }

    fn expand_commands(&self, text: &str, dir: &Path) -> Result<String, AppError> {
        self.replace_each(text, DirectiveKind::CommandInline, |directive| {
            self.emit(&format!("Executing: {}", directive.payload));
            Ok(self.ctx.runner().run(&directive.payload, dir)?.combined())
        })
    }

    /// Resolve every directive of `kind` in reverse position order, then splice once.
    fn replace_each<R>(
        &self,
        text: &str,
        kind: DirectiveKind,
        mut resolve: R,
    ) -> Result<String, AppError>
    where
        R: FnMut(&Directive) -> Result<String, AppError>,
    {
        let directives = scan(text, kind);
        if directives.is_empty() {
            return Ok(text.to_string());
        }

        let mut replacements = Vec::with_capacity(directives.len());
        for directive in directives.iter().rev() {
            replacements.push(Replacement::new(directive.span(), resolve(directive)?));
        }
        Ok(splice(text, replacements))
    }

    fn load_file(&self, path: &Path, stack: &ImportStack) -> Result<String, AppError> {
        let branch = stack.descend(path)?;
        self.emit(&format!("Loading: {}", path.display()));
        let content = std::fs::read_to_string(path)
            .map_err(|source| AppError::ImportRead { path: path.to_path_buf(), source })?;
        let dir = path.parent().unwrap_or_else(|| Path::new("/"));
        self.expand(&content, dir, &branch)
    }

    fn load_glob(&self, paths: &[PathBuf], stack: &ImportStack) -> Result<String, AppError> {
        let mut parts = Vec::with_capacity(paths.len());
        for path in paths {
            parts.push(self.load_file(path, stack)?);
        }
        let combined = parts.join(GLOB_SEPARATOR);

        let tokens = self.budget.estimate(&combined);
        self.emit(&format!("Expanding {} files, {} tokens", paths.len(), tokens));
        self.enforce_budget(tokens)?;
        Ok(combined)
    }

    fn enforce_budget(&self, tokens: TokenCount) -> Result<(), AppError> {
        if let BudgetStatus::Warn(tokens) = self.budget.check(tokens)? {
            if !self.warned.replace(true) {
                self.emit(&format!(
                    "Warning: High token count (~{} tokens) may be expensive",
                    tokens
                ));
            }
        }
        Ok(())
    }

    fn emit(&self, message: &str) {
        self.ctx.diagnostics().emit(message);
    }
}
