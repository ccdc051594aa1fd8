//! Overlapping word-window chunker

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use wordchunk_core::{WindowAccumulator, WindowParams};

use crate::{
    config::ChunkerConfig,
    context::ChunkContext,
    error::Result,
    input::Input,
    observer::{ChunkObserver, NoopObserver},
};

/// Splits text streams into overlapping windows of words.
///
/// The window parameters are fixed at construction. Each call to
/// [`chunk`](Chunker::chunk) owns its own accumulator, so one `Chunker` can be
/// shared across threads and reused for any number of inputs.
#[derive(Clone)]
pub struct Chunker {
    params: WindowParams,
    observer: Arc<dyn ChunkObserver>,
}

impl fmt::Debug for Chunker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunker")
            .field("window_size", &self.params.window_size())
            .field("overlap_size", &self.params.overlap_size())
            .finish_non_exhaustive()
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::from_params(WindowParams::default())
    }
}

impl Chunker {
    /// Create a chunker; a zero size selects the default (512 / 128 words).
    ///
    /// Fails if the overlap is not smaller than the window.
    pub fn new(window_size: usize, overlap_size: usize) -> Result<Self> {
        Self::with_config(ChunkerConfig {
            window_size: Some(window_size),
            overlap_size: Some(overlap_size),
        })
    }

    /// Create a chunker from a configuration
    pub fn with_config(config: ChunkerConfig) -> Result<Self> {
        let params = config.resolve()?;
        Ok(Self::from_params(params))
    }

    /// Create a chunker from already validated parameters
    pub fn from_params(params: WindowParams) -> Self {
        Self {
            params,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Report per-call facts to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn ChunkObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Words per chunk
    pub fn window_size(&self) -> usize {
        self.params.window_size()
    }

    /// Words repeated between consecutive chunks
    pub fn overlap_size(&self) -> usize {
        self.params.overlap_size()
    }

    /// Validated window parameters
    pub fn params(&self) -> WindowParams {
        self.params
    }

    /// Read `reader` to the end and return its chunks in order.
    ///
    /// Input is consumed line by line and each line is split on whitespace, so
    /// a word never spans a line break. Invalid UTF-8 is replaced rather than
    /// rejected. `ctx` is checked before every line; a cancelled context, a
    /// passed deadline or a read error abort the call without partial output.
    pub fn chunk<R: BufRead>(&self, ctx: &ChunkContext, reader: R) -> Result<Vec<String>> {
        let span = tracing::info_span!(
            "chunker.chunk",
            chunk_size = self.params.window_size(),
            chunk_overlap = self.params.overlap_size(),
            num_chunks = tracing::field::Empty,
        );
        let _enter = span.enter();

        self.observer
            .chunk_started(self.params.window_size(), self.params.overlap_size());

        match self.chunk_lines(ctx, reader) {
            Ok(chunks) => {
                span.record("num_chunks", chunks.len());
                self.observer.chunk_finished(chunks.len());
                Ok(chunks)
            }
            Err(err) => {
                tracing::debug!(error = %err, "chunking failed");
                Err(err)
            }
        }
    }

    /// Chunk any reader without cancellation
    pub fn chunk_reader<R: Read>(&self, reader: R) -> Result<Vec<String>> {
        self.chunk(&ChunkContext::background(), BufReader::new(reader))
    }

    /// Chunk an in-memory text
    pub fn chunk_text(&self, text: &str) -> Result<Vec<String>> {
        self.chunk(&ChunkContext::background(), text.as_bytes())
    }

    /// Chunk an [`Input`] source without cancellation
    pub fn chunk_input(&self, input: Input) -> Result<Vec<String>> {
        self.chunk_input_with(&ChunkContext::background(), input)
    }

    /// Chunk an [`Input`] source under `ctx`
    pub fn chunk_input_with(&self, ctx: &ChunkContext, input: Input) -> Result<Vec<String>> {
        let reader = input.into_buf_read()?;
        self.chunk(ctx, reader)
    }

    fn chunk_lines<R: BufRead>(&self, ctx: &ChunkContext, mut reader: R) -> Result<Vec<String>> {
        let mut acc = WindowAccumulator::new(self.params);
        let mut chunks = Vec::new();
        let mut line = Vec::new();

        loop {
            ctx.check()?;

            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            acc.push_line(&String::from_utf8_lossy(&line), &mut chunks);
        }

        if let Some(last) = acc.finish() {
            chunks.push(last);
        }

        tracing::trace!(num_chunks = chunks.len(), "input exhausted");
        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChunkError;

    #[test]
    fn test_reference_scenario() {
        let chunker = Chunker::new(4, 2).unwrap();
        let chunks = chunker.chunk_text("a b c d e f g").unwrap();
        assert_eq!(chunks, vec!["a b c d", "c d e f", "e f g"]);
    }

    #[test]
    fn test_zero_values_use_defaults() {
        let chunker = Chunker::new(0, 0).unwrap();
        assert_eq!(chunker.window_size(), 512);
        assert_eq!(chunker.overlap_size(), 128);

        let default = Chunker::default();
        assert_eq!(default.params(), chunker.params());
    }

    #[test]
    fn test_zero_overlap_only_uses_default_overlap() {
        let chunker = Chunker::new(1000, 0).unwrap();
        assert_eq!(chunker.window_size(), 1000);
        assert_eq!(chunker.overlap_size(), 128);
    }

    #[test]
    fn test_overlap_not_smaller_than_window_rejected() {
        for (window, overlap) in [(4, 4), (4, 5), (1, 1)] {
            let err = Chunker::new(window, overlap).unwrap_err();
            assert!(matches!(err, ChunkError::Configuration(_)), "{window}/{overlap}");
        }
    }

    #[test]
    fn test_empty_input() {
        let chunker = Chunker::new(4, 2).unwrap();
        assert!(chunker.chunk_text("").unwrap().is_empty());
        assert!(chunker.chunk_text("\n \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_exact_window() {
        let chunker = Chunker::new(4, 2).unwrap();
        assert_eq!(chunker.chunk_text("a b c d").unwrap(), vec!["a b c d"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let chunker = Chunker::new(4, 2).unwrap();
        let chunks = chunker.chunk_reader(&b"ok \xff\xfe bytes"[..]).unwrap();
        assert_eq!(chunks, vec!["ok \u{fffd}\u{fffd} bytes"]);
    }

    #[test]
    fn test_debug_output() {
        let chunker = Chunker::new(8, 3).unwrap();
        assert_eq!(
            format!("{chunker:?}"),
            "Chunker { window_size: 8, overlap_size: 3, .. }"
        );
    }
}
