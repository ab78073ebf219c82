//! Git Cloner
//!
//! Realizes repository acquisition by shelling out to the git client.
//! A destination that already holds a checkout is left untouched, so an
//! interrupted build can be re-run without re-cloning.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::entities::Package;
use crate::domain::ports::{CloneError, CloneOutcome, RepoCloner};
use crate::domain::value_objects::Transport;

use super::command_failure;

/// Repository cloner using the external `git` client
pub struct GitCloner;

impl GitCloner {
    /// Check if git is installed and available
    pub fn check_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl RepoCloner for GitCloner {
    fn acquire(
        &self,
        package: &Package,
        dest: &Path,
        transport: Transport,
    ) -> Result<CloneOutcome, CloneError> {
        if dest.exists() {
            return Ok(CloneOutcome::AlreadyPresent);
        }

        let url = package.clone_url(transport);

        let mut cmd = Command::new("git");
        cmd.arg("clone");
        if let Some(branch) = package.branch() {
            cmd.args(["--branch", branch]);
        }
        cmd.arg(&url).arg(dest);
        // No prompts from a build tool: if auth is not set up the clone
        // fails instead of hanging on a password read.
        cmd.env("GIT_TERMINAL_PROMPT", "0");

        let output = cmd
            .output()
            .map_err(|e| CloneError::Unavailable(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(CloneError::CommandFailed(format!(
                "git clone {}: {}",
                url,
                command_failure(&output)
            )));
        }

        Ok(CloneOutcome::Cloned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_available_does_not_panic() {
        let _ = GitCloner::check_available();
    }

    #[test]
    fn existing_checkout_is_left_untouched() {
        let workspace = tempfile::tempdir().unwrap();
        let dest = workspace.path().join("caput");
        std::fs::create_dir_all(&dest).unwrap();

        let pkg = Package::new("caput", "radiocosmology/caput");
        let outcome = GitCloner.acquire(&pkg, &dest, Transport::Https).unwrap();
        assert_eq!(outcome, CloneOutcome::AlreadyPresent);
    }
}
