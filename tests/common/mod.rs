//! Common test utilities for stackenv CLI tests.
//!
//! Provides `TestEnv`, an isolated pair of temp directories (a working
//! directory for manifests and a build target) plus helpers to run the
//! compiled binary against them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a stackenv CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the CLI runs from (holds manifest files)
    pub work: TempDir,
    /// Build target directory
    pub target: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work: TempDir::new().expect("failed to create work temp dir"),
            target: TempDir::new().expect("failed to create target temp dir"),
        }
    }

    /// Write a manifest file into the working directory
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.work.path().join("manifest.toml");
        std::fs::write(&path, content).expect("failed to write manifest");
        path
    }

    /// Path of the build target directory as a CLI argument
    pub fn target_arg(&self) -> String {
        self.target.path().display().to_string()
    }

    /// Get path relative to the target directory
    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target.path().join(relative)
    }

    /// Run stackenv in this environment from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.work.path(), args)
    }

    /// Run stackenv from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_stackenv"))
            .current_dir(cwd)
            .args(args)
            .env("STACKENV_NO_COLOR", "1")
            .output()
            .expect("failed to execute stackenv");

        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Manifest with a two-package dependency cycle
pub const CYCLIC_MANIFEST: &str = r#"
[[package]]
name = "pkg-a"
repo = "org/pkg-a"
depends-on = ["pkg-b"]

[[package]]
name = "pkg-b"
repo = "org/pkg-b"
depends-on = ["pkg-a"]
"#;

/// Manifest where pkg-utils depends on pkg-core
pub const CORE_UTILS_MANIFEST: &str = r#"
[[package]]
name = "pkg-core"
repo = "org/pkg-core"

[[package]]
name = "pkg-utils"
repo = "org/pkg-utils"
depends-on = ["pkg-core"]
"#;
