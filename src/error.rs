//! Error types for vortex sorting.

use thiserror::Error;

use crate::band::BandKey;

/// Result type alias for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors a sort call can surface.
#[derive(Error, Debug)]
pub enum SortError {
    /// An element outside the supported (non-negative) domain.
    #[error("Invalid input at index {index}: {value} is negative")]
    InvalidInput {
        /// Position of the first offending element
        index: usize,
        /// The offending value
        value: i64,
    },

    /// A band-sort task failed; the whole sort is aborted.
    #[error("Sorting band {key} failed: {reason}")]
    TaskFailure {
        /// Key of the band whose task failed
        key: BandKey,
        /// Panic message or other failure description
        reason: String,
    },

    #[error("Failed to build sort thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let error = SortError::InvalidInput { index: 3, value: -7 };
        let msg = format!("{error}");
        assert!(msg.contains("index 3"));
        assert!(msg.contains("-7"));
    }

    #[test]
    fn test_task_failure_message() {
        let error = SortError::TaskFailure { key: 5, reason: "out of memory".to_string() };
        let msg = format!("{error}");
        assert!(msg.contains("band 5"));
        assert!(msg.contains("out of memory"));
    }
}
