//! Pip Installer
//!
//! Runs installs through the environment's own interpreter so they land in
//! the provisioned environment, never the surrounding runtime. Distribution
//! installs (extras) go through a staged requirements file, editable
//! installs point pip at the cloned source tree.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::domain::ports::{InstallError, InstallFlags, InstallSpec, PackageInstaller};

use super::command_failure;
use super::paths::env_python;

/// Package installer using the environment's pip
pub struct PipInstaller;

impl PipInstaller {
    fn base_command(env: &Path, flags: &InstallFlags) -> Command {
        let mut cmd = Command::new(env_python(env));
        cmd.args(["-m", "pip", "install"]);
        if !flags.build_isolation {
            cmd.arg("--no-build-isolation");
        }
        if flags.ignore_installed {
            cmd.arg("--ignore-installed");
        }
        cmd
    }

    fn run(mut cmd: Command) -> Result<(), InstallError> {
        let output = cmd
            .output()
            .map_err(|e| InstallError::IoError(format!("failed to run pip: {}", e)))?;

        if !output.status.success() {
            return Err(InstallError::CommandFailed(command_failure(&output)));
        }
        Ok(())
    }
}

impl PackageInstaller for PipInstaller {
    fn install(
        &self,
        env: &Path,
        spec: InstallSpec<'_>,
        flags: &InstallFlags,
    ) -> Result<(), InstallError> {
        let mut cmd = Self::base_command(env, flags);

        match spec {
            InstallSpec::Editable(source) => {
                if flags.compat_editable {
                    cmd.args(["--config-settings", "editable_mode=compat"]);
                }
                cmd.arg("-e").arg(source);
                Self::run(cmd)
            }
            InstallSpec::Distributions(names) => {
                // One pip invocation for the whole set; pip decides what
                // actually needs doing.
                let mut requirements = tempfile::NamedTempFile::new()
                    .map_err(|e| InstallError::IoError(e.to_string()))?;
                for name in names {
                    writeln!(requirements, "{}", name)
                        .map_err(|e| InstallError::IoError(e.to_string()))?;
                }
                requirements
                    .flush()
                    .map_err(|e| InstallError::IoError(e.to_string()))?;

                cmd.arg("-r").arg(requirements.path());
                Self::run(cmd)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rendered_args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn base_command_uses_environment_interpreter() {
        let cmd = PipInstaller::base_command(Path::new("/srv/env/venv"), &InstallFlags::default());
        let program = PathBuf::from(cmd.get_program());
        assert!(program.starts_with("/srv/env/venv"));
        assert_eq!(rendered_args(&cmd), vec!["-m", "pip", "install"]);
    }

    #[test]
    fn fast_flags_disable_build_isolation() {
        let flags = InstallFlags {
            build_isolation: false,
            ignore_installed: false,
            compat_editable: false,
        };
        let cmd = PipInstaller::base_command(Path::new("/srv/env/venv"), &flags);
        assert!(rendered_args(&cmd).contains(&"--no-build-isolation".to_string()));
    }

    #[test]
    fn ignore_installed_is_passed_through() {
        let flags = InstallFlags {
            build_isolation: true,
            ignore_installed: true,
            compat_editable: false,
        };
        let cmd = PipInstaller::base_command(Path::new("/srv/env/venv"), &flags);
        assert!(rendered_args(&cmd).contains(&"--ignore-installed".to_string()));
    }
}
