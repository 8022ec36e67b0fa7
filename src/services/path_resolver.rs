//! File import path resolution.

use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::domain::AppError;
use crate::domain::directive::is_glob_pattern;

/// What a file-import payload resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImport {
    /// A single existing file, canonicalized.
    File(PathBuf),
    /// Every file a glob matched, sorted lexicographically.
    Glob(Vec<PathBuf>),
}

/// Turns file-import payloads into absolute paths.
///
/// Relative payloads resolve against the directory of the importing file,
/// never the process working directory.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    home: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver using the current user's home directory for `~/`.
    pub fn new() -> Self {
        Self { home: dirs::home_dir() }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: Some(home.into()) }
    }

    pub fn resolve(&self, payload: &str, base_dir: &Path) -> Result<ResolvedImport, AppError> {
        let joined = self.absolute(payload, base_dir)?;

        if is_glob_pattern(payload) {
            return self.expand_glob(payload, &joined).map(ResolvedImport::Glob);
        }

        let resolved = normalize_lexically(&joined);
        if !resolved.is_file() {
            return Err(AppError::ImportNotFound { payload: payload.to_string(), resolved });
        }
        Ok(ResolvedImport::File(resolved.canonicalize()?))
    }

    fn absolute(&self, payload: &str, base_dir: &Path) -> Result<PathBuf, AppError> {
        let path = match payload.strip_prefix("~/") {
            Some(rest) => {
                let home = self.home.as_ref().ok_or_else(|| {
                    AppError::config_error(format!(
                        "Cannot resolve '{}': home directory is unknown",
                        payload
                    ))
                })?;
                home.join(rest)
            }
            None => PathBuf::from(payload),
        };

        if path.is_absolute() { Ok(path) } else { Ok(base_dir.join(path)) }
    }

    /// Walk from the longest wildcard-free prefix and keep files matching the rest.
    fn expand_glob(&self, payload: &str, joined: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut root = PathBuf::new();
        let mut pattern_parts: Vec<String> = Vec::new();
        for component in joined.components() {
            let part = component.as_os_str().to_string_lossy();
            if pattern_parts.is_empty() && !is_glob_pattern(&part) {
                root.push(component);
            } else {
                pattern_parts.push(part.into_owned());
            }
        }
        let root = normalize_lexically(&root);
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let pattern = format!("/{}", pattern_parts.join("/"));
        let invalid = |e: ignore::Error| AppError::InvalidGlob {
            pattern: payload.to_string(),
            details: e.to_string(),
        };
        let mut builder = OverrideBuilder::new(&root);
        builder.add(&pattern).map_err(invalid)?;
        let overrides = builder.build().map_err(invalid)?;

        // Matched after the walk so that ignore files still apply to glob hits.
        let mut matches: Vec<PathBuf> = WalkBuilder::new(&root)
            .require_git(false)
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| overrides.matched(entry.path(), false).is_whitelist())
            .map(|entry| entry.into_path())
            .collect();
        matches.sort();

        matches.into_iter().map(|path| path.canonicalize().map_err(AppError::from)).collect()
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
