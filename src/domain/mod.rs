pub mod admission;
pub mod budget;
pub mod directive;
pub mod error;
pub mod expand_config;
pub mod import_stack;

pub use admission::{Admission, TEXTUAL_CONTENT_TYPES, admit};
pub use budget::{BudgetStatus, TokenBudget, TokenCount};
pub use directive::{Directive, DirectiveKind, Replacement, scan, scan_all, splice};
pub use error::AppError;
pub use expand_config::{ExpandConfig, FORCE_CONTEXT_ENV};
pub use import_stack::ImportStack;
