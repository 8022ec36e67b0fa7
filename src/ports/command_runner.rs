//! Inline command execution port definition.

use std::path::Path;

use crate::domain::AppError;

/// Captured streams of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Text spliced into the document.
    ///
    /// Error output goes first when both streams have content. A non-zero
    /// exit status does not change the result.
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim();
        let stderr = self.stderr.trim();
        match (stderr.is_empty(), stdout.is_empty()) {
            (false, false) => format!("{}\n{}", stderr, stdout),
            (false, true) => stderr.to_string(),
            (true, false) => stdout.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Port for running inline commands.
pub trait CommandRunner {
    /// Run `command` through a shell with `cwd` as the working directory.
    ///
    /// Only a failure to launch is an error.
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput, AppError>;
}
