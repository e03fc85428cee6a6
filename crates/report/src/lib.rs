//! # docflow report
//!
//! The tabular-data half of the exercise set: loads the semicolon-delimited
//! wine quality CSV and computes what the report renders - per-column
//! summary statistics and the point pairs behind the scatter plot.
//!
//! This crate produces numbers only. Printing the summary table and any
//! plot rendering are the caller's concern (the `docflow` binary prints;
//! nothing here depends on a plotting backend).

mod report;

pub use report::{load, scatter, summarize, Column, ColumnSummary, WineRecord};

/// Errors that can occur while loading the wine data.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The CSV file could not be opened or read.
    #[error("failed to open wine data: {0}")]
    Open(csv::Error),

    /// A data row could not be parsed into a [`WineRecord`].
    /// `row` is the 1-based line number including the header.
    #[error("failed to parse wine data at row {row}: {source}")]
    Parse { row: usize, source: csv::Error },

    /// A column name that is not part of the wine quality schema.
    #[error("unknown column {0:?}")]
    UnknownColumn(String),
}
