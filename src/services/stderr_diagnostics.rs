//! Diagnostics written to stderr.

use crate::ports::Diagnostics;

/// Tag prefixed to every diagnostic line.
pub const DIAGNOSTIC_TAG: &str = "[mdweave]";

/// Writes diagnostics to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn emit(&self, message: &str) {
        eprintln!("{} {}", DIAGNOSTIC_TAG, message);
    }
}
