//! stackenv - reproducible multi-repository development environment builder
//!
//! stackenv provisions a Python virtual environment, clones a
//! manifest-declared set of interdependent source packages, and installs
//! them in editable mode in an order that respects their mutual
//! dependencies.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{BuildOptions, BuildReport, BuildStatus, BuildUseCase, FilterReason};
pub use domain::entities::{Manifest, Package};
pub use domain::services::{resolve, InstallPlan};
pub use domain::value_objects::{Membership, MembershipMode, Transport};
pub use error::{StackenvError, StackenvResult};
