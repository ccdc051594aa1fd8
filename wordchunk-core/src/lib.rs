//! Sliding-window word chunking
//!
//! This crate holds the pure windowing algorithm with no I/O, logging or
//! configuration concerns. Text is split into whitespace-delimited words line
//! by line, words are accumulated into windows of `window_size` words, and each
//! closed window seeds the next one with its trailing `overlap_size` words.
//!
//! # Example
//!
//! ```rust
//! use wordchunk_core::{segment, WindowParams};
//!
//! let params = WindowParams::new(4, 2).unwrap();
//! let chunks = segment("a b c d e f g", params);
//! assert_eq!(chunks, vec!["a b c d", "c d e f", "e f g"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod params;
pub mod segment;
pub mod window;

pub use error::{CoreError, Result};
pub use params::{WindowParams, DEFAULT_OVERLAP_SIZE, DEFAULT_WINDOW_SIZE};
pub use segment::{segment, split_words};
pub use window::WindowAccumulator;
