//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena allocation.
///
/// Allocation failure is fatal to the operation that requested it — there
/// is no partial result and no retry. Whether it is fatal to the whole
/// process is the caller's decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Segment pool is full — no more blocks can be carved.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Total capacity available across all segments.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}
