//! Core error types (deterministic only)

use core::fmt;

/// Window parameter errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Window size of zero words
    ZeroWindowSize,
    /// Overlap size of zero words
    ZeroOverlapSize,
    /// Overlap would reach back past the start of a closed window
    OverlapNotSmallerThanWindow {
        /// Configured words per window
        window_size: usize,
        /// Configured overlap words
        overlap_size: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ZeroWindowSize => write!(f, "window_size must be greater than 0"),
            CoreError::ZeroOverlapSize => write!(f, "overlap_size must be greater than 0"),
            CoreError::OverlapNotSmallerThanWindow {
                window_size,
                overlap_size,
            } => write!(
                f,
                "overlap_size ({overlap_size}) must be smaller than window_size ({window_size})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
