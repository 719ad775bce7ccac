//! Core error types (deterministic only)

use core::fmt;

/// Segmentation invariant violations (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An in-script code point was not covered by any grapheme
    CoverageGap {
        /// Byte offset of the uncovered code point
        offset: usize,
    },
    /// A scan step produced an empty or overlapping span
    StalledScan {
        /// Byte offset at which the scan stopped advancing
        offset: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::CoverageGap { offset } => {
                write!(f, "in-script code point at byte {offset} not covered")
            }
            CoreError::StalledScan { offset } => {
                write!(f, "scan did not advance at byte {offset}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
