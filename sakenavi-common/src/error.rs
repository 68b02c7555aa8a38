//! Common error types for Sakenavi

use thiserror::Error;

/// Common result type for Sakenavi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Sakenavi services
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream reference data could not be fetched or decoded
    #[error("Upstream data unavailable: {0}")]
    Upstream(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Selected flavor feature label does not exist in the catalog
    #[error("Unknown flavor feature: {0}")]
    UnknownFeature(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
