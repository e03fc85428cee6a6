//! Document intake and storage.
//!
//! The [`DocumentStore`] routes files from a flat intake directory into the
//! date/extension-keyed storage hierarchy. A single file moves through
//! validate → derive path → copy → verify; the batch operation runs that
//! pipeline over every intake entry, one at a time, recovering each file's
//! failure so the batch always runs to completion.

use crate::error::{StoreError, StoreResult};
use crate::filename;
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

/// A file that could not be stored, with the reason it failed.
#[derive(Debug)]
pub struct FailedDocument {
    /// Filename as it appears in the intake directory.
    pub name: String,
    /// The first error the pipeline hit for this file.
    pub error: StoreError,
}

/// Outcome of a batch run over the intake directory.
///
/// `failed` preserves the iteration order of the intake listing.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub stored: usize,
    pub failed: Vec<FailedDocument>,
}

/// Service that routes files from an intake directory into the storage
/// hierarchy rooted at `root_dir`.
///
/// Both directories are explicit constructor parameters rather than global
/// configuration, so test fixtures can run isolated against temporary
/// directories. A single process is assumed to own both directories for the
/// duration of a run; concurrent writers are not supported.
#[derive(Debug)]
pub struct DocumentStore {
    intake_dir: PathBuf,
    root_dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store over the given intake and root directories.
    ///
    /// No I/O happens here; the directories are created on demand by
    /// [`setup`](crate::lifecycle::setup) or by the first store operation.
    pub fn new(intake_dir: impl Into<PathBuf>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            intake_dir: intake_dir.into(),
            root_dir: root_dir.into(),
        }
    }

    /// The intake directory this store reads from.
    #[must_use]
    pub fn intake_dir(&self) -> &Path {
        &self.intake_dir
    }

    /// The storage hierarchy root this store writes into.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Stores a single file from the intake directory.
    ///
    /// The pipeline for one file:
    ///
    /// 1. validate the name (a validation error aborts before any I/O);
    /// 2. create the target directory `root/firstDay/extension` if absent;
    /// 3. require `intake/file_name` to be an existing regular file;
    /// 4. copy it to `target/customer`, overwriting any existing document
    ///    at that destination;
    /// 5. verify the destination exists and its byte length matches the
    ///    source's. A copy that succeeds at the OS level but leaves a size
    ///    mismatch counts as a failure; there is no retry.
    ///
    /// The source file is left in place - removal on success is
    /// [`store_all`](Self::store_all)'s job.
    ///
    /// # Returns
    ///
    /// The destination path of the stored document.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] for any naming-contract violation,
    /// [`StoreError::SourceMissing`] if the intake file is absent,
    /// [`StoreError::CopyVerificationFailed`] on a short or missing copy,
    /// and the operation-specific I/O variants otherwise.
    pub fn store_one(&self, file_name: &str) -> StoreResult<PathBuf> {
        let fields = filename::validate(file_name)?;

        let target_dir = paths::storage_dir(
            &self.root_dir,
            fields.first_day(),
            fields.extension().as_str(),
        );
        fs::create_dir_all(&target_dir).map_err(StoreError::DirCreation)?;

        let source = self.intake_dir.join(file_name);
        if !source.is_file() {
            return Err(StoreError::SourceMissing(source));
        }

        let destination = target_dir.join(fields.customer());
        fs::copy(&source, &destination).map_err(StoreError::Copy)?;
        verify_copy(&source, &destination)?;

        Ok(destination)
    }

    /// Stores every file in the intake directory, one at a time.
    ///
    /// The listing is flat and non-recursive. Each entry goes through
    /// [`store_one`](Self::store_one); on success the source file is removed
    /// from intake (the only deletion trigger in the system), on failure the
    /// file is left in place for inspection or manual retry and the batch
    /// continues with the next entry.
    ///
    /// # Errors
    ///
    /// Only listing the intake directory itself can fail the batch; every
    /// per-file error is recovered into the returned [`BatchOutcome`].
    pub fn store_all(&self) -> StoreResult<BatchOutcome> {
        let mut outcome = BatchOutcome::default();

        for entry in fs::read_dir(&self.intake_dir).map_err(StoreError::IntakeList)? {
            let entry = entry.map_err(StoreError::IntakeList)?;
            let name = entry.file_name().to_string_lossy().into_owned();

            let stored = self.store_one(&name).and_then(|destination| {
                fs::remove_file(self.intake_dir.join(&name)).map_err(StoreError::SourceRemoval)?;
                Ok(destination)
            });

            match stored {
                Ok(destination) => {
                    tracing::info!("stored {} at {}", name, destination.display());
                    outcome.stored += 1;
                }
                Err(error) => {
                    tracing::warn!("failed to store {}: {}", name, error);
                    outcome.failed.push(FailedDocument { name, error });
                }
            }
        }

        Ok(outcome)
    }
}

/// Checks that the destination exists and is byte-for-byte as long as the
/// source. Defends against partial writes that the copy call did not report.
fn verify_copy(source: &Path, destination: &Path) -> StoreResult<()> {
    if !destination.exists() {
        return Err(StoreError::CopyVerificationFailed(
            destination.to_path_buf(),
        ));
    }

    let source_len = fs::metadata(source).map_err(StoreError::Copy)?.len();
    let destination_len = fs::metadata(destination).map_err(StoreError::Copy)?.len();
    if source_len != destination_len {
        return Err(StoreError::CopyVerificationFailed(
            destination.to_path_buf(),
        ));
    }

    Ok(())
}
