//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Package` - One source package known to the manifest
//! - `Manifest` - The immutable catalog of packages for one build

mod manifest;
mod package;

pub use manifest::Manifest;
pub use package::{Package, DEFAULT_HOST};
