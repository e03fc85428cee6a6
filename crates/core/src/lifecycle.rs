//! Creation and reset of the database directories.

use crate::error::{StoreError, StoreResult};
use std::fs;
use std::path::Path;

/// Result of a [`reset`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The root existed; its contents were removed and the directory kept.
    Cleared,
    /// The root did not exist; nothing was done.
    RootMissing,
}

/// Creates the database root and intake directories if absent.
///
/// Idempotent: directories that already exist are left untouched and calling
/// this twice produces the same directory set as calling it once.
///
/// # Errors
///
/// Returns [`StoreError::DirCreation`] if either directory cannot be created.
pub fn setup(root: &Path, intake: &Path) -> StoreResult<()> {
    fs::create_dir_all(root).map_err(StoreError::DirCreation)?;
    fs::create_dir_all(intake).map_err(StoreError::DirCreation)?;
    Ok(())
}

/// Empties the database root, keeping the root directory itself.
///
/// Entries are removed one at a time; this is not atomic, and an interrupted
/// run can leave a partially cleared tree.
///
/// # Errors
///
/// Returns [`StoreError::Reset`] if the root path exists but is not a
/// directory, or if listing or removing an entry fails.
pub fn reset(root: &Path) -> StoreResult<ResetOutcome> {
    if !root.exists() {
        return Ok(ResetOutcome::RootMissing);
    }
    if !root.is_dir() {
        return Err(StoreError::Reset(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("root path {} exists but is not a directory", root.display()),
        )));
    }

    for entry in fs::read_dir(root).map_err(StoreError::Reset)? {
        let entry = entry.map_err(StoreError::Reset)?;
        let path = entry.path();
        if entry.file_type().map_err(StoreError::Reset)?.is_dir() {
            fs::remove_dir_all(&path).map_err(StoreError::Reset)?;
        } else {
            fs::remove_file(&path).map_err(StoreError::Reset)?;
        }
    }

    Ok(ResetOutcome::Cleared)
}
