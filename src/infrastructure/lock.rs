//! Build Lock
//!
//! Advisory lock on the target directory. The environment's installed state
//! is mutated incrementally, so two concurrent builds against the same
//! target must not interleave; the second invocation fails fast instead.

use std::fs::File;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{StackenvError, StackenvResult};

/// Name of the lock file inside the target directory
pub const LOCK_FILE: &str = ".stackenv.lock";

/// Exclusive advisory lock held for the duration of one build
#[derive(Debug)]
pub struct BuildLock {
    file: File,
    path: PathBuf,
}

impl BuildLock {
    /// Acquire the lock for `target`, which must already exist.
    pub fn acquire(target: &Path) -> StackenvResult<Self> {
        let path = target.join(LOCK_FILE);
        let file = File::create(&path)?;
        file.try_lock_exclusive()
            .map_err(|_| StackenvError::TargetLocked {
                path: target.to_path_buf(),
            })?;
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
