//! On-disk path construction for the document database.
//!
//! This module contains **no I/O logic** - only typed path construction.
//! The storage layout is:
//!
//! ```text
//! <root>/<firstDay>/<extension>/<customer>
//! ```
//!
//! The stored filename is the customer name alone; the extension lives in
//! the directory component, not the filename.

use crate::filename::ValidFields;
use std::path::{Path, PathBuf};

/// Directory a validated document is stored under: `root/firstDay/extension`.
///
/// The `first_day` component is the raw 6-character string from the
/// filename, not a normalized date.
#[must_use]
pub fn storage_dir(root: &Path, first_day: &str, extension: &str) -> PathBuf {
    root.join(first_day).join(extension)
}

/// Full path a validated document is stored at.
#[must_use]
pub fn document_path(root: &Path, fields: &ValidFields) -> PathBuf {
    storage_dir(root, fields.first_day(), fields.extension().as_str()).join(fields.customer())
}
