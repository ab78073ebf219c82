//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod cloner;
pub mod installer;
pub mod provisioner;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use cloner::{CloneError, CloneOutcome, RepoCloner};
pub use installer::{InstallError, InstallFlags, InstallSpec, PackageInstaller};
pub use provisioner::{EnvironmentProvisioner, ProvisionError, ProvisionOptions, ProvisionOutcome};
