//! Build Event Port
//!
//! Provides an observable interface for build operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Build started
    Started {
        target: PathBuf,
        package_count: usize,
    },

    /// Membership/exclude filtering applied
    ManifestFiltered {
        retained: usize,
        skipped: Vec<String>,
    },

    /// Install order resolved
    PlanResolved { order: Vec<String> },

    /// Environment is ready for installs
    ProvisionFinished { root: PathBuf, reused: bool },

    /// Repository acquisition started
    CloneStarted { package: String },

    /// Repository acquired (or found already present)
    CloneFinished { package: String, reused: bool },

    /// Repository acquisition failed
    CloneFailed { package: String, error: String },

    /// Extra distributions installed into the environment
    ExtrasInstalled { count: usize },

    /// Editable install started
    InstallStarted {
        index: usize,
        total: usize,
        package: String,
    },

    /// Editable install finished
    InstallFinished { index: usize, package: String },

    /// Install skipped because a dependency failed earlier
    InstallSkipped {
        package: String,
        failed_dependency: String,
    },

    /// Editable install failed
    InstallFailed {
        index: usize,
        package: String,
        error: String,
    },

    /// Build completed
    Completed {
        installed_count: usize,
        skipped_count: usize,
        failed_count: usize,
    },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants detailed events (e.g., per-package)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
