//! @ai:module:intent Define error types for the n-gram summary pipeline
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for every pipeline stage
#[derive(Error, Debug)]
pub enum Error {
    #[error("Results directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Cannot extract n-gram key from {file_name:?}: {reason}")]
    KeyExtraction { file_name: String, reason: String },

    #[error("Column {column:?} not found in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Missing label in column {column:?} at row {row} of {path}")]
    MissingLabel {
        path: PathBuf,
        column: String,
        row: usize,
    },

    #[error("Column {column:?} of {path} holds continuous values, expected class labels")]
    ContinuousLabels { path: PathBuf, column: String },

    #[error("Mix of numeric and text labels in {path}")]
    MixedLabelTypes { path: PathBuf },

    #[error("No prediction rows in {0}")]
    EmptyPredictions(PathBuf),

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// @ai:intent Build an IO error tagged with the path it concerns
    /// @ai:effects pure
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// @ai:intent Build a CSV error tagged with the path it concerns
    /// @ai:effects pure
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_names_file_and_column() {
        let err = Error::MissingColumn {
            path: PathBuf::from("scores/run--2-gram.csv"),
            column: "pred".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("\"pred\""));
        assert!(message.contains("run--2-gram.csv"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io(
            "out/summary.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("out/summary.csv"));
    }
}
