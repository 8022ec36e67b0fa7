//! Shared testing utilities for mdweave CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    home: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base = root.path().canonicalize().expect("Failed to canonicalize temp directory");
        let work_dir = base.join("work");
        let home = base.join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&home).expect("Failed to create test home directory");

        Self { root, work_dir, home }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mdweave` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdweave").expect("Failed to locate mdweave binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home)
            .env_remove("MDWEAVE_FORCE_CONTEXT");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(rel);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directories");
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a file relative to the emulated home directory.
    pub fn write_home(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.home.join(rel);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directories");
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel)).expect("Failed to read test file")
    }
}
