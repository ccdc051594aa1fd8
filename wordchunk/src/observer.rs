//! Observability side channel
//!
//! A chunking call reports two facts: the window parameters it ran with and
//! the number of chunks it produced. Observers never influence the result.

/// Receiver for per-call chunking facts
pub trait ChunkObserver: Send + Sync {
    /// Called before the input is read
    fn chunk_started(&self, window_size: usize, overlap_size: usize);

    /// Called after a successful call with the number of chunks produced
    fn chunk_finished(&self, num_chunks: usize);
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ChunkObserver for NoopObserver {
    fn chunk_started(&self, _window_size: usize, _overlap_size: usize) {}

    fn chunk_finished(&self, _num_chunks: usize) {}
}

/// Observer that re-emits the facts as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ChunkObserver for TracingObserver {
    fn chunk_started(&self, window_size: usize, overlap_size: usize) {
        tracing::info!(
            chunk_size = window_size,
            chunk_overlap = overlap_size,
            "chunking started"
        );
    }

    fn chunk_finished(&self, num_chunks: usize) {
        tracing::info!(num_chunks, "chunking finished");
    }
}
