//! Error types for the API

use thiserror::Error;

use crate::error::CoreError;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any segmentation ran
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown tokenization method
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Segmentation broke one of its own invariants
    #[error("Segmentation failed in {operation}: {source}")]
    SegmentationFailure {
        /// Operation that was running
        operation: &'static str,
        /// Underlying invariant violation
        #[source]
        source: CoreError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl Error {
    pub(crate) fn segmentation(operation: &'static str) -> impl FnOnce(CoreError) -> Self {
        move |source| Error::SegmentationFailure { operation, source }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
