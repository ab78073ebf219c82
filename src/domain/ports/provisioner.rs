//! Environment Provisioner Port
//!
//! Exclusive owner of the isolated environment's lifecycle: no other
//! component may create or destroy the environment directory.

use std::path::Path;

/// Error during environment provisioning
#[derive(Debug, Clone)]
pub enum ProvisionError {
    /// The interpreter used to build the environment is not available
    Unavailable(String),
    /// Environment creation or setup ran and failed
    CommandFailed(String),
    /// Local filesystem error
    IoError(String),
}

impl std::fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "not available: {}", msg),
            Self::CommandFailed(msg) => write!(f, "provisioning failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ProvisionError {}

/// Result of provisioning the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Fresh environment was created
    Created,
    /// A usable environment already existed at the path
    Reused,
}

/// Options threaded through to environment creation
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Shell prompt prefix for the environment
    pub prompt: String,
    /// Whether packages importable from the surrounding runtime are visible
    pub system_site_packages: bool,
}

impl Default for ProvisionOptions {
    fn default() -> Self {
        Self {
            prompt: "venv".to_string(),
            system_site_packages: true,
        }
    }
}

/// Trait for creating the isolated runtime environment.
///
/// Implementations must be idempotent: a usable environment already present
/// at `root` reports [`ProvisionOutcome::Reused`] rather than erroring, so a
/// previously-interrupted build can be retried.
pub trait EnvironmentProvisioner: Send + Sync {
    /// Ensure a usable environment exists at `root`
    fn provision(
        &self,
        root: &Path,
        options: &ProvisionOptions,
    ) -> Result<ProvisionOutcome, ProvisionError>;
}
