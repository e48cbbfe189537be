//! The public arena allocator.
//!
//! [`Arena`] is a bulk-lifetime byte region: blocks are carved by
//! advancing a bump cursor and are never freed one at a time. The only
//! release mechanisms are [`Arena::reset`] and dropping the arena, either
//! of which invalidates every outstanding [`ByteHandle`] at once.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::ByteHandle;
use crate::segment::SegmentList;

/// A bulk-lifetime byte arena.
///
/// Freshly carved blocks are zero-filled. Every allocation takes
/// `&mut self`, so an arena cannot be shared across threads without
/// external synchronisation — arena exclusivity is the caller's
/// responsibility, not this crate's.
///
/// # Examples
///
/// ```
/// use twine_arena::Arena;
///
/// let mut arena = Arena::with_defaults();
/// let block = arena.alloc_bytes(b"hello").unwrap();
/// assert_eq!(arena.bytes(&block), b"hello");
///
/// arena.reset(); // invalidates every handle at once
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena {
    segments: SegmentList,
    config: ArenaConfig,
}

impl Arena {
    /// Create an arena with the given configuration.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            segments: SegmentList::new(config.segment_size, config.max_segments),
            config,
        }
    }

    /// Create an arena with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ArenaConfig::new())
    }

    /// Carve a zero-filled block of `len` bytes.
    ///
    /// Fails with [`ArenaError::CapacityExceeded`] if the request exceeds
    /// a single segment or the segment pool is exhausted.
    pub fn alloc(&mut self, len: usize) -> Result<ByteHandle, ArenaError> {
        let (segment_index, offset) = self.segments.alloc(len)?;
        Ok(ByteHandle::new(segment_index, offset, len as u32))
    }

    /// Carve a block and fill it with a copy of `bytes`.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> Result<ByteHandle, ArenaError> {
        let block = self.alloc(bytes.len())?;
        self.write(&block, 0, bytes);
        Ok(block)
    }

    /// Resolve a handle to a shared view of its block.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not fit its segment (a stale or foreign
    /// handle).
    pub fn bytes(&self, block: &ByteHandle) -> &[u8] {
        self.segments
            .slice(block.segment_index, block.offset, block.len)
    }

    /// Copy `bytes` into `block` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + bytes.len()` exceeds the block's length.
    pub fn write(&mut self, block: &ByteHandle, offset: u32, bytes: &[u8]) {
        let len = bytes.len() as u32;
        assert!(
            offset.checked_add(len).is_some_and(|end| end <= block.len),
            "write of {len} bytes at offset {offset} exceeds block {block}"
        );
        self.segments
            .slice_mut(block.segment_index, block.offset + offset, len)
            .copy_from_slice(bytes);
    }

    /// Copy `len` bytes from `src` (starting at `src_offset`) into `dst`
    /// (starting at `dst_offset`).
    ///
    /// Both blocks must be live allocations of this arena. This is the
    /// primitive for building a derived value out of an existing one: the
    /// source is read and the destination written in a single call, so no
    /// intermediate heap copy is needed.
    ///
    /// # Panics
    ///
    /// Panics if either range exceeds its block.
    pub fn copy(
        &mut self,
        src: &ByteHandle,
        src_offset: u32,
        len: u32,
        dst: &ByteHandle,
        dst_offset: u32,
    ) {
        assert!(
            src_offset.checked_add(len).is_some_and(|end| end <= src.len),
            "copy of {len} bytes at offset {src_offset} exceeds source {src}"
        );
        assert!(
            dst_offset.checked_add(len).is_some_and(|end| end <= dst.len),
            "copy of {len} bytes at offset {dst_offset} exceeds destination {dst}"
        );
        self.segments.copy_between(
            src.segment_index,
            src.offset + src_offset,
            dst.segment_index,
            dst.offset + dst_offset,
            len,
        );
    }

    /// Bulk release: rewind every segment cursor.
    ///
    /// All outstanding handles become invalid. The backing memory is kept
    /// for reuse; blocks are re-zeroed as they are carved again.
    pub fn reset(&mut self) {
        self.segments.reset();
    }

    /// Total bytes currently allocated.
    pub fn used(&self) -> usize {
        self.segments.total_used()
    }

    /// Number of segments currently backing the arena.
    pub fn segment_count(&self) -> usize {
        self.segments.segment_count()
    }

    /// Memory footprint of the backing segments in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.segments.memory_bytes()
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}
