//! Filename validation for the document intake contract.
//!
//! Producers drop files into the intake directory named
//! `Customer.DDMMYY.DDMMYY.ext`: the customer the document belongs to, the
//! first and last day of the period it covers, and one of the supported
//! extensions. Nothing about a name is cached — every operation re-parses
//! the candidate string through [`validate`].

use crate::error::ValidationError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Number of dot-separated fields in a well-formed name.
const FIELD_COUNT: usize = 4;

/// Exact length of the two date fields.
const DATE_LEN: usize = 6;

/// chrono pattern for the 6-character day-month-year date fields.
const DATE_FORMAT: &str = "%d%m%y";

/// Document extensions accepted by the intake contract.
///
/// Matching is case-sensitive: `XML` is rejected, only the exact lowercase
/// forms are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocExtension {
    Xml,
    Csv,
    Json,
}

impl DocExtension {
    /// Returns the extension exactly as it appears in a filename.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DocExtension::Xml => "xml",
            DocExtension::Csv => "csv",
            DocExtension::Json => "json",
        }
    }
}

impl FromStr for DocExtension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(DocExtension::Xml),
            "csv" => Ok(DocExtension::Csv),
            "json" => Ok(DocExtension::Json),
            other => Err(ValidationError::UnsupportedExtension(other.to_owned())),
        }
    }
}

impl fmt::Display for DocExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four fields extracted from a validated filename.
///
/// The date fields keep their raw 6-character string form: storage paths
/// are built from the string exactly as the producer wrote it, not from a
/// normalized date, so formatting oddities survive downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    customer: String,
    first_day: String,
    last_day: String,
    extension: DocExtension,
}

impl ValidFields {
    /// The customer name, used as the stored document's filename.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// The raw first-day string (`DDMMYY`), used as a path component.
    #[must_use]
    pub fn first_day(&self) -> &str {
        &self.first_day
    }

    /// The raw last-day string (`DDMMYY`).
    #[must_use]
    pub fn last_day(&self) -> &str {
        &self.last_day
    }

    /// The validated extension.
    #[must_use]
    pub fn extension(&self) -> DocExtension {
        self.extension
    }
}

/// Validates a candidate filename against the intake naming contract.
///
/// The rules, checked in order:
///
/// 1. exactly four dot-separated fields;
/// 2. the fourth field is one of `xml`, `csv`, `json` (case-sensitive);
/// 3. the second and third fields are each exactly 6 characters;
/// 4. both parse as real calendar dates under `DDMMYY`;
/// 5. the first-day date is not after the last-day date (equal is fine).
///
/// Two-digit years follow chrono's `%y` pivot: 00–68 map to 2000–2068 and
/// 69–99 to 1969–1999. The pivoted dates are used for the order comparison
/// only; the raw strings are what callers see and what paths are built from.
///
/// # Errors
///
/// Returns the [`ValidationError`] variant naming the first rule violated.
pub fn validate(name: &str) -> Result<ValidFields, ValidationError> {
    let fields: Vec<&str> = name.split('.').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ValidationError::MalformedName {
            found: fields.len(),
        });
    }

    let extension: DocExtension = fields[3].parse()?;

    for raw in [fields[1], fields[2]] {
        if raw.len() != DATE_LEN {
            return Err(ValidationError::BadDateFormat(raw.to_owned()));
        }
    }

    let first = parse_day(fields[1])?;
    let last = parse_day(fields[2])?;
    if first > last {
        return Err(ValidationError::DateOrder {
            first_day: fields[1].to_owned(),
            last_day: fields[2].to_owned(),
        });
    }

    Ok(ValidFields {
        customer: fields[0].to_owned(),
        first_day: fields[1].to_owned(),
        last_day: fields[2].to_owned(),
        extension,
    })
}

fn parse_day(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_owned()))
}
