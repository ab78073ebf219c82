//! Build Module
//!
//! Orchestrates the environment build flow for stackenv.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BuildOptions`)
//! - `report` - Result types (`BuildReport`, `BuildStatus`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stackenv::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(cloner, provisioner, installer);
//! let report = use_case.execute(&manifest, &BuildOptions::new(), &target);
//! ```

mod options;
mod report;
mod use_case;

pub use options::BuildOptions;
pub use report::{BuildReport, BuildStatus, FilterReason};
pub use use_case::{BuildUseCase, ENV_DIR, WORKSPACE_DIR};
