//! Validated window parameters

use crate::error::{CoreError, Result};

/// Default number of words per chunk
pub const DEFAULT_WINDOW_SIZE: usize = 512;

/// Default number of words repeated between consecutive chunks
pub const DEFAULT_OVERLAP_SIZE: usize = 128;

/// Window and overlap sizes, both measured in words.
///
/// A `WindowParams` value always satisfies `0 < overlap_size < window_size`,
/// so seeding a new window from a closed one never indexes before its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowParams {
    window_size: usize,
    overlap_size: usize,
}

impl WindowParams {
    /// Validate a window/overlap pair
    pub fn new(window_size: usize, overlap_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(CoreError::ZeroWindowSize);
        }
        if overlap_size == 0 {
            return Err(CoreError::ZeroOverlapSize);
        }
        if overlap_size >= window_size {
            return Err(CoreError::OverlapNotSmallerThanWindow {
                window_size,
                overlap_size,
            });
        }

        Ok(Self {
            window_size,
            overlap_size,
        })
    }

    /// Words per chunk
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Words carried from one chunk into the next
    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }

    /// Words consumed from the input between two window closures
    pub fn stride(&self) -> usize {
        self.window_size - self.overlap_size
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
        }
    }
}
