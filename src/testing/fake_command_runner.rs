use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Canned command output; unknown commands fail to launch.
#[derive(Default)]
pub struct FakeCommandRunner {
    outputs: HashMap<String, CommandOutput>,
    pub invocations: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_output(command, stdout, "", 0)
    }

    pub fn with_output(mut self, command: &str, stdout: &str, stderr: &str, code: i32) -> Self {
        self.outputs.insert(
            command.to_string(),
            CommandOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code: Some(code),
            },
        );
        self
    }

    pub fn invocations(&self) -> Vec<(String, PathBuf)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput, AppError> {
        self.invocations.lock().unwrap().push((command.to_string(), cwd.to_path_buf()));
        self.outputs.get(command).cloned().ok_or_else(|| AppError::CommandLaunch {
            command: command.to_string(),
            details: "command not found".into(),
        })
    }
}
