//! Cancellation and deadline context for a chunking call

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{ChunkError, Result};

/// Shared cancellation flag.
///
/// Clones observe the same flag, so one clone can be handed to the thread
/// running the chunker while another is kept to request cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Per-call context carrying an optional cancellation token and deadline.
///
/// The chunker checks the context once per line read.
#[derive(Debug, Clone, Default)]
pub struct ChunkContext {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl ChunkContext {
    /// Context that never cancels
    pub fn background() -> Self {
        Self::default()
    }

    /// Attach a cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Abort once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort once `timeout` has elapsed from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The configured deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Return an error if the call should stop
    pub fn check(&self) -> Result<()> {
        if self.token.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Err(ChunkError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(ChunkError::DeadlineExceeded);
        }
        Ok(())
    }
}
