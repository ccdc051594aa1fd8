//! Input sources for chunking
//!
//! Every source is opened as a buffered line reader so that all of them share
//! one chunking path.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;

use crate::error::Result;

/// Unified input abstraction
pub enum Input {
    /// Direct text string
    Text(String),
    /// Raw bytes, decoded line by line
    Bytes(Vec<u8>),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (stdin, sockets, decompressors, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Open the source as a buffered reader.
    ///
    /// Files are opened here; a missing or unreadable file is an I/O error
    /// naming the path.
    pub fn into_buf_read(self) -> Result<Box<dyn BufRead + Send>> {
        let reader: Box<dyn BufRead + Send> = match self {
            Input::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Input::Bytes(bytes) => Box::new(Cursor::new(bytes)),
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    std::io::Error::new(
                        e.kind(),
                        format!("failed to open {}: {e}", path.display()),
                    )
                })?;
                Box::new(BufReader::new(file))
            }
            Input::Reader(reader) => Box::new(BufReader::new(reader)),
        };
        Ok(reader)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
