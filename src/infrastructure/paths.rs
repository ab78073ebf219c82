//! Path helpers for user input and environment internals

use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied path to the home directory.
///
/// Paths without a tilde prefix, and systems where the home directory
/// cannot be determined, pass through unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let path_str = path.display().to_string();
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    } else if path_str == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    path.to_path_buf()
}

/// Path of the environment's own interpreter.
///
/// Installs must run through this interpreter (not a bare `pip` on PATH) so
/// they target the provisioned environment.
pub fn env_python(env_root: &Path) -> PathBuf {
    if cfg!(windows) {
        env_root.join("Scripts").join("python.exe")
    } else {
        env_root.join("bin").join("python")
    }
}
