//! Arena-backed immutable strings and line reading.
//!
//! [`Str`] is an immutable byte string whose storage lives in a
//! [`twine_arena::Arena`]: every transformation (concatenation, sub-range
//! extraction, trimming) allocates fresh storage and returns a new value,
//! and nothing is ever mutated in place or freed individually.
//!
//! [`LineReader`] is the one producer of `Str` values that originates
//! outside program-supplied data: it accumulates raw stream bytes in a
//! transient doubling buffer, then materializes the finished line in the
//! arena and drops the buffer. The two allocation paths are structurally
//! distinct so their release disciplines can never be confused.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;
pub mod error;
pub mod reader;
pub mod string;

// Public re-exports for the primary API surface.
pub use error::ReadError;
pub use reader::{LineReader, Lines, LINE_TERMINATOR};
pub use string::Str;
