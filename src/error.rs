use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("movie '{0}' not found")]
    NotFound(String),

    #[error("catalog file '{}' doesn't exist", .0.display())]
    MissingFile(PathBuf),

    #[error("movie '{0}' already exists")]
    Duplicate(String),

    #[error("malformed catalog data: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported catalog file extension: '{0}'")]
    UnsupportedFormat(String),

    #[error("metadata lookup failed: {0}")]
    Lookup(String),
}
