//! Error types for Quire Core

use thiserror::Error;

/// Result type alias using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;

/// Top-level error type for all Quire operations
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load asset {path}: {source}")]
    Asset {
        path: String,
        #[source]
        source: StorageError,
    },

    #[error("Duplicate package entry: {0}")]
    DuplicateEntry(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

/// Errors raised while constructing a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing metadata")]
    MissingMetadata,

    #[error("Missing metadata: {0}")]
    MissingField(&'static str),

    #[error("Missing cover image")]
    MissingCoverImage,
}

/// Errors that occur while reading assets
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
