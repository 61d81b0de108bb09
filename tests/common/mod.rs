//! Shared testing utilities for kbmod CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated root directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `kbmod` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kbmod").expect("Failed to locate kbmod binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to a module directory inside the work directory.
    pub fn module_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Assert that a module directory exists.
    pub fn assert_module_exists(&self, name: &str) {
        assert!(self.module_path(name).exists(), "Module directory {} should exist", name);
    }

    /// Assert that a module directory does not exist.
    pub fn assert_module_not_exists(&self, name: &str) {
        assert!(!self.module_path(name).exists(), "Module directory {} should not exist", name);
    }

    /// Assert that a relative path exists inside a module directory.
    pub fn assert_module_path_exists(&self, name: &str, relative: &str) {
        let path = self.module_path(name).join(relative);
        assert!(path.exists(), "Expected path should exist at {}", path.display());
    }
}
