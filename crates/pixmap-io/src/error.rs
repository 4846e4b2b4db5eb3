//! Error types for pixel-map I/O.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The token stream does not form a well-formed pixel map:
    /// truncated input, a token that is not an integer, or a channel
    /// value outside [0, 255].
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Error from the pixel buffer itself, e.g. negative dimensions in
    /// the header.
    #[error(transparent)]
    Core(#[from] pixmap_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
