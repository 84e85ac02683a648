//! Error types for table loading and lookup.

use std::path::PathBuf;

use thiserror::Error;

use aneurisk_model::LabelError;

/// Errors that can occur while loading or querying the repository tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read or parse a CSV file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in a CSV file.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Case selection outside the repository's id range.
    #[error("case selection out of range: ids must lie in [1, 99], got {value}")]
    SelectionOutOfRange { value: u32 },

    /// Label is valid but has no row in the loaded table.
    #[error("case {label} not found in the cases table")]
    CaseNotFound { label: String },

    /// A coordinate column holds no value for the requested case.
    #[error("no {column} value recorded for case {label}")]
    MissingPoint { column: String, label: String },

    /// Case identifier failed to resolve.
    #[error(transparent)]
    Label(#[from] LabelError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
