pub mod api;
pub mod cli;
mod context;
mod expander;

pub use context::AppContext;
pub use expander::Expander;
