//! In-memory segmentation helpers

use alloc::string::String;
use alloc::vec::Vec;

use crate::{params::WindowParams, window::WindowAccumulator};

/// Split one line into words.
///
/// A word is a maximal run of non-whitespace characters (Unicode
/// `White_Space`). Empty tokens never appear.
pub fn split_words(line: &str) -> core::str::SplitWhitespace<'_> {
    line.split_whitespace()
}

/// Chunk an in-memory text.
///
/// Words are split per line, so a word never spans a line break.
pub fn segment(text: &str, params: WindowParams) -> Vec<String> {
    let mut acc = WindowAccumulator::new(params);
    let mut chunks = Vec::new();

    for line in text.lines() {
        acc.push_line(line, &mut chunks);
    }

    if let Some(last) = acc.finish() {
        chunks.push(last);
    }
    chunks
}
