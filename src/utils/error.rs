use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Invalid argument '{field}' ({value:?}): {reason}")]
    Usage {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "Unexpected CSV headers: expected [{}], found [{}]",
        .expected.join(","),
        .found.join(",")
    )]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Malformed field on line {line}: column '{column}' value {value:?} is not a valid {expected}")]
    MalformedField {
        line: u64,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Malformed row on line {line}: expected {expected} fields, found {found}")]
    RowLength {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Io,
    Schema,
    Data,
    Serialization,
}

impl EtlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage { .. } => ErrorCategory::Usage,
            Self::Io { .. } | Self::Csv(_) => ErrorCategory::Io,
            Self::Schema { .. } => ErrorCategory::Schema,
            Self::MalformedField { .. } | Self::RowLength { .. } => ErrorCategory::Data,
            Self::Serialization(_) => ErrorCategory::Serialization,
        }
    }

    /// Usage errors share clap's exit status; everything else is a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Usage { field, reason, .. } => format!("Invalid {}: {}", field, reason),
            Self::Io { path, source } => {
                format!("Cannot access file '{}': {}", path.display(), source)
            }
            Self::Csv(e) => format!("The input is not readable as CSV: {}", e),
            Self::Schema { found, .. } if found.is_empty() => {
                "The input file is empty; a header row is required".to_string()
            }
            Self::Schema { found, .. } => {
                format!("Unexpected CSV headers: {}", found.join(","))
            }
            Self::MalformedField {
                line,
                column,
                value,
                ..
            } => format!("Line {}: '{}' is not a valid {}", line, value, column),
            Self::RowLength {
                line,
                expected,
                found,
            } => format!("Line {} has {} fields instead of {}", line, found, expected),
            Self::Serialization(e) => format!("Could not render JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Usage: housing-etl <input.csv> <output.json>",
            ErrorCategory::Io => {
                "Check that the input exists and the output directory is writable"
            }
            ErrorCategory::Schema => {
                "The first row must be exactly: value,income,age,rooms,bedrooms,pop,hh"
            }
            ErrorCategory::Data => "Fix the offending row; every field must be numeric",
            ErrorCategory::Serialization => {
                "Report this input; well-formed records always serialize"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
