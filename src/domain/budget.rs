//! Token budget estimation and enforcement.

use std::fmt;

use crate::domain::AppError;
use crate::domain::expand_config::{ExpandConfig, FORCE_CONTEXT_ENV};

/// Estimated token count, rendered with thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TokenCount(pub usize);

impl fmt::Display for TokenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

/// Outcome of a budget check that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Under the warn threshold.
    Within(TokenCount),
    /// Over the warn threshold; expansion continues.
    Warn(TokenCount),
}

/// Warn and hard thresholds applied to admitted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    pub chars_per_token: usize,
    pub warn_tokens: usize,
    pub max_tokens: usize,
    /// Operator override: the hard limit only warns.
    pub force: bool,
}

impl TokenBudget {
    pub fn from_config(config: &ExpandConfig) -> Self {
        Self {
            chars_per_token: config.chars_per_token.max(1),
            warn_tokens: config.warn_tokens,
            max_tokens: config.max_tokens,
            force: config.force_context,
        }
    }

    /// Estimate tokens for a piece of text (characters, not bytes).
    pub fn estimate(&self, text: &str) -> TokenCount {
        self.estimate_chars(text.chars().count())
    }

    pub fn estimate_chars(&self, chars: usize) -> TokenCount {
        TokenCount(chars.div_ceil(self.chars_per_token.max(1)))
    }

    /// Classify an estimate against the thresholds.
    ///
    /// Over the hard limit fails with `TokenBudgetExceeded` unless the
    /// override is set, in which case it degrades to a warning.
    pub fn check(&self, tokens: TokenCount) -> Result<BudgetStatus, AppError> {
        if tokens.0 > self.max_tokens {
            if self.force {
                return Ok(BudgetStatus::Warn(tokens));
            }
            return Err(AppError::TokenBudgetExceeded {
                tokens,
                limit: TokenCount(self.max_tokens),
                override_var: FORCE_CONTEXT_ENV,
            });
        }
        if tokens.0 > self.warn_tokens {
            return Ok(BudgetStatus::Warn(tokens));
        }
        Ok(BudgetStatus::Within(tokens))
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self::from_config(&ExpandConfig::default())
    }
}
