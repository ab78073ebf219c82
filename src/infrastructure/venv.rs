//! Venv Provisioner
//!
//! Creates the virtual environment with `python -m venv` and upgrades pip
//! inside it. An existing environment (detected via `pyvenv.cfg`) is reused
//! rather than recreated; the pip upgrade still runs so a retried build
//! never installs through a stale pip.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{
    EnvironmentProvisioner, ProvisionError, ProvisionOptions, ProvisionOutcome,
};

use super::command_failure;
use super::paths::env_python;

/// Environment provisioner using the external `python -m venv`
pub struct VenvProvisioner {
    python: PathBuf,
}

impl VenvProvisioner {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Check if the interpreter is installed and available
    pub fn check_available() -> bool {
        Command::new("python3")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// A usable environment already exists at the root
    fn is_provisioned(root: &Path) -> bool {
        root.join("pyvenv.cfg").is_file()
    }

    fn create(&self, root: &Path, options: &ProvisionOptions) -> Result<(), ProvisionError> {
        let mut cmd = Command::new(&self.python);
        cmd.args(["-m", "venv"]);
        if options.system_site_packages {
            cmd.arg("--system-site-packages");
        }
        cmd.arg("--prompt").arg(&options.prompt);
        cmd.arg(root);

        let output = cmd.output().map_err(|e| {
            ProvisionError::Unavailable(format!("failed to run {}: {}", self.python.display(), e))
        })?;

        if !output.status.success() {
            return Err(ProvisionError::CommandFailed(format!(
                "venv creation: {}",
                command_failure(&output)
            )));
        }
        Ok(())
    }

    fn upgrade_pip(&self, root: &Path) -> Result<(), ProvisionError> {
        let output = Command::new(env_python(root))
            .args(["-m", "pip", "install", "--upgrade", "pip"])
            .output()
            .map_err(|e| ProvisionError::IoError(format!("failed to run pip: {}", e)))?;

        if !output.status.success() {
            return Err(ProvisionError::CommandFailed(format!(
                "pip upgrade: {}",
                command_failure(&output)
            )));
        }
        Ok(())
    }
}

impl Default for VenvProvisioner {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl EnvironmentProvisioner for VenvProvisioner {
    fn provision(
        &self,
        root: &Path,
        options: &ProvisionOptions,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        let outcome = if Self::is_provisioned(root) {
            ProvisionOutcome::Reused
        } else {
            self.create(root, options)?;
            ProvisionOutcome::Created
        };

        self.upgrade_pip(root)?;
        Ok(outcome)
    }
}
