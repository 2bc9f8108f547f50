//! Error types for the month sorter

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for month sorter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the month sorter
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File name does not match the YYYYMMDD_id.ext pattern: {filename}")]
    NoPatternMatch { filename: String },

    #[error("Malformed {field} field in {filename}: {source}")]
    MalformedField {
        filename: String,
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Date extracted from {filename} is later than the current date")]
    FutureDate { filename: String },

    #[error("Failed to read creation time of {}: {message}", path.display())]
    MetadataUnavailable { path: PathBuf, message: String },

    #[error("open {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create month folder {label} at {}: {source}", path.display())]
    CreateFolder {
        label: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
