use crate::error::PipelineError;
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};

/// Tests in this crate that change the working directory hold this lock.
#[cfg(test)]
pub(crate) static CURRENT_DIR_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Changes the process working directory and puts the previous one back.
///
/// Call [`ScopedDirectory::restore`] to find out whether returning succeeded.
/// If the guard is dropped instead, the directory is restored anyway and a
/// failure is only logged.
#[derive(Debug)]
pub struct ScopedDirectory {
    original: PathBuf,
    restored: bool,
}

impl ScopedDirectory {
    pub fn enter(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let original = env::current_dir()?;
        env::set_current_dir(path.as_ref()).map_err(|source| PipelineError::ChangeDirectory {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        debug!(
            "working directory: {} -> {}",
            original.display(),
            path.as_ref().display()
        );
        Ok(ScopedDirectory {
            original,
            restored: false,
        })
    }

    pub fn original(&self) -> &Path {
        &self.original
    }

    pub fn restore(mut self) -> Result<(), PipelineError> {
        self.restored = true;
        env::set_current_dir(&self.original).map_err(|source| PipelineError::RestoreDirectory {
            path: self.original.clone(),
            source,
        })?;
        debug!("working directory restored: {}", self.original.display());
        Ok(())
    }
}

impl Drop for ScopedDirectory {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(
                "Failed to return to directory {}: {}",
                self.original.display(),
                e
            );
        }
    }
}
