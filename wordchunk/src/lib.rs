//! Overlapping word-window chunking for embedding and indexing pipelines
//!
//! A [`Chunker`] reads a text stream line by line, splits every line into
//! whitespace-delimited words and groups the words into windows of
//! `window_size` words. Each window after the first starts with the last
//! `overlap_size` words of the window before it.
//!
//! # Example
//!
//! ```rust
//! use wordchunk::Chunker;
//!
//! let chunker = Chunker::new(4, 2).unwrap();
//! let chunks = chunker.chunk_text("a b c d e f g").unwrap();
//! assert_eq!(chunks, vec!["a b c d", "c d e f", "e f g"]);
//! ```
//!
//! Zero sizes select the defaults of 512 words per window and 128 words of
//! overlap. Every call runs inside a `chunker.chunk` tracing span carrying
//! `chunk_size`, `chunk_overlap` and `num_chunks`; a [`ChunkObserver`] can be
//! attached to receive the same facts directly.

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod observer;

// Re-export key types
pub use chunker::Chunker;
pub use config::{defaults, ChunkerConfig, ChunkerConfigBuilder};
pub use context::{CancellationToken, ChunkContext};
pub use error::{ChunkError, Result};
pub use input::Input;
pub use observer::{ChunkObserver, NoopObserver, TracingObserver};

// Re-export from core for convenience
pub use wordchunk_core::{segment, WindowParams};
