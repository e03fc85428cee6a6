//! Error types for document validation and storage.

use crate::constants::VALID_EXTENSIONS;
use std::path::PathBuf;

/// Rule violations detected while validating a candidate filename.
///
/// Each variant names the rule that failed and carries the offending field,
/// so callers can branch on the reason programmatically instead of parsing
/// diagnostic text.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The name did not split into exactly four dot-separated fields.
    #[error("malformed name: expected 4 dot-separated fields, found {found}")]
    MalformedName { found: usize },
    /// The extension field is not one of `xml`, `csv`, `json`.
    #[error("unsupported extension {0:?} (expected one of: {valid})", valid = VALID_EXTENSIONS.join(", "))]
    UnsupportedExtension(String),
    /// A date field is not exactly 6 characters long.
    #[error("bad date format {0:?} (expected 6 characters, DDMMYY)")]
    BadDateFormat(String),
    /// A date field is 6 characters but not a real calendar date.
    #[error("invalid calendar date {0:?}")]
    InvalidDate(String),
    /// The first-day date is strictly after the last-day date.
    #[error("first day {first_day} is after last day {last_day}")]
    DateOrder { first_day: String, last_day: String },
}

/// Errors raised while storing documents or maintaining the database
/// directories.
///
/// All of these are local to a single file; [`store_all`] recovers them
/// per file and never lets one abort the batch.
///
/// [`store_all`]: crate::store::DocumentStore::store_all
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("source file missing: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error("copy verification failed for {}: destination absent or size mismatch", .0.display())]
    CopyVerificationFailed(PathBuf),
    #[error("failed to list intake directory: {0}")]
    IntakeList(std::io::Error),
    #[error("failed to create storage directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to copy document: {0}")]
    Copy(std::io::Error),
    #[error("failed to remove stored source file: {0}")]
    SourceRemoval(std::io::Error),
    #[error("failed to reset database root: {0}")]
    Reset(std::io::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
