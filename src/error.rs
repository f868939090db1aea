//! Error types for Granary.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Granary operations.
pub type Result<T> = std::result::Result<T, GranaryError>;

/// Errors that can occur in Granary.
#[derive(Debug, Error)]
pub enum GranaryError {
    /// Failed to open a dataset file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a dataset file.
    #[error("Failed to parse {path}: {message}")]
    ParseData { path: PathBuf, message: String },

    /// A dataset file contained no usable entries.
    #[error("No usable entries in {path}")]
    EmptyDataset { path: PathBuf },

    /// No data available for a requested country.
    #[error("No data available for country: {name}")]
    CountryNotFound { name: String },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl GranaryError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseData error.
    pub fn parse_data(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an EmptyDataset error.
    pub fn empty_dataset(path: impl Into<PathBuf>) -> Self {
        Self::EmptyDataset { path: path.into() }
    }

    /// Create a CountryNotFound error.
    pub fn country_not_found(name: impl Into<String>) -> Self {
        Self::CountryNotFound { name: name.into() }
    }
}
