//! Constants used throughout the docflow workspace.
//!
//! This module contains the directory name defaults to ensure consistency
//! between the library crates and the command-line surface.

/// Default directory name for the storage hierarchy root ("the database").
pub const DEFAULT_ROOT_DIR_NAME: &str = "database";

/// Default directory name for the intake inbox holding newly arrived,
/// not-yet-validated files.
pub const DEFAULT_INTAKE_DIR_NAME: &str = "intake";

/// Extensions accepted by the filename contract, lowercase exact-match.
/// Must stay in step with [`DocExtension`](crate::filename::DocExtension).
pub const VALID_EXTENSIONS: [&str; 3] = ["xml", "csv", "json"];
