//! Word accumulator for a single chunking run

use alloc::string::String;
use alloc::vec::Vec;

use crate::{params::WindowParams, segment::split_words};

/// In-progress chunk state.
///
/// Words are appended into one growable buffer joined by single spaces, with
/// the byte offset of every word start tracked alongside. When the buffer
/// reaches `window_size` words it is emitted as a chunk and the trailing
/// `overlap_size` words are kept as the seed of the next window.
///
/// An accumulator belongs to exactly one run; create a fresh one per input.
#[derive(Debug, Clone)]
pub struct WindowAccumulator {
    params: WindowParams,
    buffer: String,
    starts: Vec<usize>,
    // Words appended since the last window closed
    fresh: usize,
}

impl WindowAccumulator {
    /// Create an empty accumulator
    pub fn new(params: WindowParams) -> Self {
        Self {
            params,
            buffer: String::new(),
            starts: Vec::with_capacity(params.window_size()),
            fresh: 0,
        }
    }

    /// Append one word, returning the chunk if this word closed the window.
    ///
    /// `word` must be a single whitespace-free token.
    pub fn push_word(&mut self, word: &str) -> Option<String> {
        debug_assert!(!word.is_empty() && !word.contains(char::is_whitespace));

        if !self.starts.is_empty() {
            self.buffer.push(' ');
        }
        self.starts.push(self.buffer.len());
        self.buffer.push_str(word);
        self.fresh += 1;

        if self.starts.len() < self.params.window_size() {
            return None;
        }
        Some(self.close_window())
    }

    /// Split `line` into words and append them in order.
    ///
    /// Closed chunks are appended to `out`; returns how many were closed.
    pub fn push_line(&mut self, line: &str, out: &mut Vec<String>) -> usize {
        let before = out.len();
        for word in split_words(line) {
            if let Some(chunk) = self.push_word(word) {
                out.push(chunk);
            }
        }
        out.len() - before
    }

    /// Number of words currently held, including the overlap seed
    pub fn word_count(&self) -> usize {
        self.starts.len()
    }

    /// Number of words appended since the last window closed
    pub fn fresh_words(&self) -> usize {
        self.fresh
    }

    /// Current accumulator content
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Parameters this accumulator was created with
    pub fn params(&self) -> WindowParams {
        self.params
    }

    /// Consume the accumulator and return the final partial chunk.
    ///
    /// Returns `None` when nothing was appended after the last closure: a
    /// window that closed on the final input word leaves only its own overlap
    /// words behind, and those are already part of the emitted chunk.
    pub fn finish(self) -> Option<String> {
        if self.fresh > 0 {
            Some(self.buffer)
        } else {
            None
        }
    }

    fn close_window(&mut self) -> String {
        let chunk = self.buffer.clone();

        // stride >= 1 and < window_size, so the index is in range
        let dropped = self.params.stride();
        let keep_from = self.starts[dropped];

        self.buffer.drain(..keep_from);
        self.starts.drain(..dropped);
        for start in &mut self.starts {
            *start -= keep_from;
        }
        self.fresh = 0;

        chunk
    }
}
