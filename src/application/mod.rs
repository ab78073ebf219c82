//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Orchestrates the environment build (filter, resolve,
//!   provision, acquire, install)

pub mod build;

pub use build::{BuildOptions, BuildReport, BuildStatus, BuildUseCase, FilterReason};
