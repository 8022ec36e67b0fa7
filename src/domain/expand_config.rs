//! Expansion settings.

use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// Environment flag that disables the hard token limit.
pub const FORCE_CONTEXT_ENV: &str = "MDWEAVE_FORCE_CONTEXT";

/// Settings for one expansion run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpandConfig {
    /// Estimated tokens above which a cost warning is printed.
    #[serde(default = "default_warn_tokens")]
    pub warn_tokens: usize,
    /// Estimated tokens above which expansion fails.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Characters counted as one token.
    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: usize,
    /// Proceed past the hard limit with only a warning.
    #[serde(default)]
    pub force_context: bool,
    /// User agent sent with URL imports.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// URL import timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            warn_tokens: default_warn_tokens(),
            max_tokens: default_max_tokens(),
            chars_per_token: default_chars_per_token(),
            force_context: false,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_warn_tokens() -> usize {
    50_000
}

fn default_max_tokens() -> usize {
    100_000
}

fn default_chars_per_token() -> usize {
    4
}

fn default_user_agent() -> String {
    format!("mdweave/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout() -> u64 {
    30
}

impl ExpandConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Load settings from a TOML file, then overlay the process environment.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Ok(Self::parse(&content)?.with_env())
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: ExpandConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MDWEAVE_FORCE_CONTEXT`; an unset or falsy flag leaves the setting alone.
    pub fn with_env(mut self) -> Self {
        if std::env::var(FORCE_CONTEXT_ENV).is_ok_and(|value| is_truthy(&value)) {
            self.force_context = true;
        }
        self
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.chars_per_token == 0 {
            return Err(AppError::config_error("chars_per_token must be greater than zero"));
        }
        if self.warn_tokens > self.max_tokens {
            return Err(AppError::config_error(format!(
                "warn_tokens ({}) must not exceed max_tokens ({})",
                self.warn_tokens, self.max_tokens
            )));
        }
        Ok(())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
