//! Package Installer Port
//!
//! A single operation covering both install shapes the build needs:
//! editable installs of cloned source trees, and plain distribution
//! installs for the manifest's extras. The orchestration logic stays
//! agnostic to how the underlying tool resolves third-party dependencies.

use std::path::Path;

/// Error during package installation
#[derive(Debug, Clone)]
pub enum InstallError {
    /// The install command ran and failed
    CommandFailed(String),
    /// Local filesystem error (e.g. staging a requirements file)
    IoError(String),
}

impl std::fmt::Display for InstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandFailed(msg) => write!(f, "install failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for InstallError {}

/// What to install
#[derive(Debug, Clone, Copy)]
pub enum InstallSpec<'a> {
    /// Editable install of a source tree
    Editable(&'a Path),
    /// Named distributions from the package index
    Distributions(&'a [String]),
}

/// Installer behavior switches, threaded through from the build options
#[derive(Debug, Clone, Copy)]
pub struct InstallFlags {
    /// Build each package in an isolated build environment (off in fast mode)
    pub build_isolation: bool,
    /// Force fresh installs instead of reusing importable system copies
    pub ignore_installed: bool,
    /// Use the legacy editable install layout
    pub compat_editable: bool,
}

impl Default for InstallFlags {
    fn default() -> Self {
        Self {
            build_isolation: true,
            ignore_installed: false,
            compat_editable: false,
        }
    }
}

/// Trait for installing into the provisioned environment
pub trait PackageInstaller: Send + Sync {
    /// Install `spec` into the environment rooted at `env`
    fn install(
        &self,
        env: &Path,
        spec: InstallSpec<'_>,
        flags: &InstallFlags,
    ) -> Result<(), InstallError>;
}
