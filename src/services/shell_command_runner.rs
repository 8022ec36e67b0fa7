//! Shell-backed execution of inline commands.

use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Runs inline commands through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput, AppError> {
        let output = Self::shell(command).current_dir(cwd).output().map_err(|e| {
            AppError::CommandLaunch { command: command.to_string(), details: e.to_string() }
        })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
