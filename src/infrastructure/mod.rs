//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git` - Repository acquisition via the external git client
//! - `venv` - Environment provisioning via `python -m venv`
//! - `pip` - Editable and distribution installs via the environment's pip
//! - `manifest_file` - TOML manifest loading with unknown-key warnings
//! - `lock` - Advisory build lock on the target directory
//! - `paths` - Home expansion and environment interpreter paths

pub mod git;
pub mod lock;
pub mod manifest_file;
pub mod paths;
pub mod pip;
pub mod venv;

pub use git::GitCloner;
pub use lock::BuildLock;
pub use manifest_file::{load_default_manifest, load_manifest, ManifestWarning};
pub use pip::PipInstaller;
pub use venv::VenvProvisioner;

use std::process::Output;

/// Render a failed command's stderr into a compact, single-line-ish error
/// message: exit status plus the last few stderr lines.
pub(crate) fn command_failure(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let tail: Vec<&str> = stderr
        .lines()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let code = output
        .status
        .code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string());
    if tail.is_empty() {
        format!("exit code {}", code)
    } else {
        format!("exit code {}: {}", code, tail.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn command_failure_includes_exit_code_and_stderr() {
        let output = Command::new("sh")
            .args(["-c", "echo boom >&2; exit 3"])
            .output()
            .unwrap();
        let msg = command_failure(&output);
        assert!(msg.contains("exit code 3"), "{msg}");
        assert!(msg.contains("boom"), "{msg}");
    }
}
