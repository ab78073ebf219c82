//! Build Report
//!
//! Per-package outcomes plus the overall status of one build invocation.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Why a package was left out of the build set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// Dropped by membership policy
    Membership,
    /// Explicitly excluded by the user
    Excluded,
}

impl std::fmt::Display for FilterReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterReason::Membership => write!(f, "membership"),
            FilterReason::Excluded => write!(f, "excluded"),
        }
    }
}

/// Overall status of the build, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// Every retained package installed
    Success,
    /// Environment produced, but some packages failed or were skipped
    Degraded,
    /// No usable environment (configuration, provisioning, or extras failure)
    Failed,
}

impl BuildStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildStatus::Success => 0,
            BuildStatus::Failed => 1,
            BuildStatus::Degraded => 2,
        }
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::Success => write!(f, "success"),
            BuildStatus::Degraded => write!(f, "degraded"),
            BuildStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a build invocation
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// When the build started
    pub started_at: DateTime<Utc>,
    /// Wall-clock build time
    pub elapsed: Duration,
    /// Packages installed, in install order
    pub installed: Vec<String>,
    /// Packages dropped before resolution, with the reason
    pub filtered: Vec<(String, FilterReason)>,
    /// Packages skipped because a dependency failed: (package, failed dependency)
    pub skipped: Vec<(String, String)>,
    /// Packages whose acquisition or install failed: (package, error)
    pub failed: Vec<(String, String)>,
    /// Build-scoped errors (resolution, provisioning, extras)
    pub errors: Vec<String>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            elapsed: Duration::ZERO,
            installed: Vec::new(),
            filtered: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Overall status: build-scoped errors mean nothing usable was produced;
    /// per-package failures degrade the build but leave the environment
    /// usable for the branches that did install.
    pub fn status(&self) -> BuildStatus {
        if !self.errors.is_empty() {
            BuildStatus::Failed
        } else if !self.failed.is_empty() || !self.skipped.is_empty() {
            BuildStatus::Degraded
        } else {
            BuildStatus::Success
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == BuildStatus::Success
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }
}

impl Default for BuildReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_success() {
        let report = BuildReport::new();
        assert_eq!(report.status(), BuildStatus::Success);
        assert!(report.is_success());
        assert_eq!(report.status().exit_code(), 0);
    }

    #[test]
    fn package_failure_degrades() {
        let mut report = BuildReport::new();
        report.installed.push("caput".to_string());
        report
            .failed
            .push(("chimedb".to_string(), "clone failed".to_string()));
        assert_eq!(report.status(), BuildStatus::Degraded);
        assert_eq!(report.status().exit_code(), 2);
    }

    #[test]
    fn skipped_dependent_degrades() {
        let mut report = BuildReport::new();
        report
            .skipped
            .push(("ch-util".to_string(), "chimedb".to_string()));
        assert_eq!(report.status(), BuildStatus::Degraded);
    }

    #[test]
    fn build_error_fails() {
        let mut report = BuildReport::new();
        report.installed.push("caput".to_string());
        report.add_error("provisioning failed: no python");
        assert_eq!(report.status(), BuildStatus::Failed);
        assert_eq!(report.status().exit_code(), 1);
    }

    #[test]
    fn filtered_packages_do_not_affect_status() {
        let mut report = BuildReport::new();
        report
            .filtered
            .push(("chimedb-config".to_string(), FilterReason::Membership));
        assert_eq!(report.status(), BuildStatus::Success);
    }

    #[test]
    fn filter_reason_display() {
        assert_eq!(FilterReason::Membership.to_string(), "membership");
        assert_eq!(FilterReason::Excluded.to_string(), "excluded");
    }
}
