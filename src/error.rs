//! Error types for stackenv
//!
//! Uses `thiserror` for library errors. Per-package clone/install failures
//! are collected in the build report instead of propagating through here;
//! this enum covers the fatal, build-aborting conditions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stackenv operations
pub type StackenvResult<T> = Result<T, StackenvError>;

/// Main error type for stackenv operations
#[derive(Error, Debug)]
pub enum StackenvError {
    /// Two manifest entries share a name
    #[error("duplicate package '{name}' in manifest")]
    DuplicatePackage { name: String },

    /// A package lists itself as a dependency
    #[error("package '{name}' declares a dependency on itself")]
    SelfDependency { name: String },

    /// A declared dependency does not resolve to a package in the build set
    #[error("package '{package}' depends on '{missing}', which is not in the build set")]
    DanglingDependency { package: String, missing: String },

    /// The dependency graph contains a cycle
    #[error("dependency cycle: {}", .cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },

    /// Manifest file could not be parsed
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Target path exists but is not a directory
    #[error("target path '{path}' exists but is not a directory")]
    TargetNotADirectory { path: PathBuf },

    /// Another build already holds the lock on the target directory
    #[error("another build is already running against '{path}'")]
    TargetLocked { path: PathBuf },

    /// A required external tool is not on PATH
    #[error("required tool '{tool}' not found - {hint}")]
    ToolMissing { tool: String, hint: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_dangling_dependency() {
        let err = StackenvError::DanglingDependency {
            package: "ch-util".to_string(),
            missing: "chimedb".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "package 'ch-util' depends on 'chimedb', which is not in the build set"
        );
    }

    #[test]
    fn test_error_display_cycle() {
        let err = StackenvError::DependencyCycle {
            cycle: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(err.to_string(), "dependency cycle: a -> b -> a");
    }

    #[test]
    fn test_error_display_target_locked() {
        let err = StackenvError::TargetLocked {
            path: PathBuf::from("/tmp/env"),
        };
        assert_eq!(
            err.to_string(),
            "another build is already running against '/tmp/env'"
        );
    }
}
