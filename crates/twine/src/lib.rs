//! Twine: arena-backed immutable strings with a growable line reader.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Twine sub-crates. For most users, adding `twine` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use twine::prelude::*;
//!
//! // One arena backs every string; releasing it releases them all.
//! let mut arena = Arena::with_defaults();
//!
//! // Lines come out of any `Read` source; the paired sink is flushed
//! // before each read so prompts are visible first.
//! let input = &b"  hello \nworld\n"[..];
//! let mut reader = LineReader::new(input, std::io::sink());
//!
//! let first = reader.read_line(&mut arena).unwrap().unwrap();
//! let second = reader.read_line(&mut arena).unwrap().unwrap();
//! assert!(reader.read_line(&mut arena).unwrap().is_none());
//!
//! // Transformations allocate new values; nothing is mutated in place.
//! let trimmed = first.trim(&mut arena).unwrap();
//! let sep = Str::new(&mut arena, " ").unwrap();
//! let joined = trimmed
//!     .concat(&mut arena, sep)
//!     .unwrap()
//!     .concat(&mut arena, second)
//!     .unwrap();
//! assert_eq!(joined.as_bytes(&arena), b"hello world");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `twine-arena` | Bump-allocated byte storage, handles, config |
//! | [`text`] | `twine-text` | The `Str` value type and line reading |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bump-allocated byte storage (`twine-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::ArenaConfig`] from
/// this module — they are also available in the [`prelude`].
pub use twine_arena as arena;

/// String values and line reading (`twine-text`).
///
/// The [`text::Str`] value type and the [`text::LineReader`] that
/// materializes stream input as arena-backed strings.
pub use twine_text as text;

/// Common imports for typical Twine usage.
///
/// ```rust
/// use twine::prelude::*;
/// ```
pub mod prelude {
    pub use twine_arena::{Arena, ArenaConfig, ArenaError};
    pub use twine_text::{LineReader, ReadError, Str};
}
