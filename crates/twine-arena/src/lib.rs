//! Bump-allocated byte storage for Twine strings.
//!
//! Provides the arena that owns every string's backing bytes: a growable
//! region of zero-initialised byte segments carved up by a monotonically
//! advancing cursor. Individual blocks are never freed — the whole arena
//! is released at once, either by [`Arena::reset`] or by dropping it.
//!
//! # Architecture
//!
//! ```text
//! Arena (public allocator)
//! └── SegmentList → Segment[] (64KB bump-allocated Vec<u8>)
//! ```
//!
//! Allocations are resolved through [`ByteHandle`] location descriptors
//! rather than references, so values built on top of the arena can be
//! `Copy` and hold no lifetime claim on the arena that produced them.
//! Staleness discipline (never resolving a handle after the arena it came
//! from has been reset or dropped) is the caller's responsibility.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
mod segment;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::ByteHandle;
