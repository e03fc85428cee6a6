//! # docflow core
//!
//! Core logic for the document intake exercise: filename validation,
//! storage-path derivation, the document store, and database lifecycle.
//!
//! The storage hierarchy itself is the database. A stored document lives at
//! `<root>/<firstDay>/<extension>/<customer>` and no separate index of
//! stored documents is kept; two files carrying the same customer name,
//! first day, and extension overwrite one another.
//!
//! Everything here is single-threaded, synchronous, blocking `std::fs` I/O.
//! A single process is assumed to own the intake and root directories for
//! the duration of a run; concurrent writers are not supported.
//!
//! **No report concerns**: the wine CSV summary lives in `docflow-report`,
//! and the command-line surface in `docflow-cli`.

pub mod constants;
pub mod error;
pub mod filename;
pub mod lifecycle;
pub mod paths;
pub mod store;

pub use error::{StoreError, StoreResult, ValidationError};
pub use filename::{validate, DocExtension, ValidFields};
pub use lifecycle::{reset, setup, ResetOutcome};
pub use store::{BatchOutcome, DocumentStore, FailedDocument};
