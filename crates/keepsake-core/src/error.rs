//! Error types for gallery operations.

use thiserror::Error;

/// Errors that can occur in gallery operations.
///
/// Filtering, facets and statistics never fail; only mutations, ingestion
/// and configuration loading report errors.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// No memory with the given ID exists in the collection.
    #[error("memory not found: {0}")]
    MemoryNotFound(String),

    /// None of the uploaded files is of a supported type.
    #[error("unsupported upload: {0}")]
    UnsupportedUpload(String),

    /// A configuration value could not be parsed.
    #[error("invalid value for {0}: {1}")]
    InvalidConfig(String, String),
}

/// Result type alias for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
