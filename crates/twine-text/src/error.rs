//! Error types for line reading.

use std::fmt;
use std::io;

use twine_arena::ArenaError;

/// Errors that can occur while reading a line into the arena.
///
/// Note that "the stream is exhausted" is not an error — the reader
/// reports it as `Ok(None)` so callers can tell it apart from an empty
/// line that was actually read.
#[derive(Debug)]
pub enum ReadError {
    /// An I/O error occurred while flushing output or reading input.
    Io(io::Error),
    /// The arena could not satisfy the allocation for the finished line.
    Arena(ArenaError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Arena(e) => write!(f, "line allocation failed: {e}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Arena(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ArenaError> for ReadError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
