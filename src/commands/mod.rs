//! CLI command implementations

pub mod create;
pub mod plan;

use std::path::Path;

use stackenv::infrastructure::manifest_file::{load_default_manifest, load_manifest};
use stackenv::infrastructure::paths::expand_home;
use stackenv::{Manifest, StackenvResult};

/// Load the manifest named on the command line, or the built-in catalog,
/// surfacing unknown-key warnings on stderr.
pub(crate) fn load_manifest_or_default(path: Option<&Path>) -> StackenvResult<Manifest> {
    match path {
        Some(path) => {
            let path = expand_home(path);
            let (manifest, warnings) = load_manifest(&path)?;
            for w in &warnings {
                match w.line {
                    Some(line) => eprintln!(
                        "warning: unknown manifest key '{}' in {}:{}",
                        w.key,
                        w.file.display(),
                        line
                    ),
                    None => eprintln!(
                        "warning: unknown manifest key '{}' in {}",
                        w.key,
                        w.file.display()
                    ),
                }
                if let Some(suggestion) = &w.suggestion {
                    eprintln!("   did you mean '{}'?", suggestion);
                }
            }
            Ok(manifest)
        }
        None => load_default_manifest(),
    }
}
