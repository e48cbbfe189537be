//! Contiguous byte segments and the growable segment list.
//!
//! A [`Segment`] is a fixed-capacity contiguous `Vec<u8>` with bump
//! allocation. A [`SegmentList`] is a growable collection of segments that
//! overflows into new segments when the current one is full.

use crate::error::ArenaError;

/// A single contiguous byte segment with bump allocation.
///
/// Segments are the fundamental storage unit of the arena. Each segment is
/// a pre-allocated `Vec<u8>` with a cursor that advances on each
/// allocation. Segments are never freed during runtime — only reset or
/// dropped at the end of the arena's life.
pub(crate) struct Segment {
    /// Backing storage. Allocated to full capacity at creation.
    data: Vec<u8>,
    /// Bump pointer: next free position in bytes.
    cursor: usize,
}

impl Segment {
    /// Create a new zero-initialised segment with the given capacity.
    pub(crate) fn new(capacity: u32) -> Self {
        Self {
            data: vec![0; capacity as usize],
            cursor: 0,
        }
    }

    /// Bump-allocate `len` bytes from this segment.
    ///
    /// Returns the starting offset, or `None` if there is insufficient
    /// remaining capacity. The returned block is zero-filled.
    pub(crate) fn alloc(&mut self, len: u32) -> Option<u32> {
        let len = len as usize;
        let new_cursor = self.cursor.checked_add(len)?;
        if new_cursor > self.data.len() {
            return None;
        }
        let offset = self.cursor as u32;
        // Zero the block: it may hold stale bytes from before a reset.
        self.data[self.cursor..new_cursor].fill(0);
        self.cursor = new_cursor;
        Some(offset)
    }

    /// Get a shared slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the segment's capacity.
    pub(crate) fn slice(&self, offset: u32, len: u32) -> &[u8] {
        let start = offset as usize;
        let end = start + len as usize;
        &self.data[start..end]
    }

    /// Get a mutable slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the segment's capacity.
    pub(crate) fn slice_mut(&mut self, offset: u32, len: u32) -> &mut [u8] {
        let start = offset as usize;
        let end = start + len as usize;
        &mut self.data[start..end]
    }

    /// Copy `len` bytes from `src_offset` to `dst_offset` within this segment.
    pub(crate) fn copy_within(&mut self, src_offset: u32, dst_offset: u32, len: u32) {
        let src = src_offset as usize;
        let len = len as usize;
        self.data.copy_within(src..src + len, dst_offset as usize);
    }

    /// Reset the bump pointer to zero without deallocating.
    ///
    /// All previous allocations become invalid. The backing memory is NOT
    /// zeroed — the next `alloc()` zeroes its block before handing it out.
    pub(crate) fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of bytes currently allocated.
    pub(crate) fn used(&self) -> usize {
        self.cursor
    }

    /// Memory usage of the backing storage in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.data.len()
    }
}

/// A growable list of [`Segment`]s with overflow-based bump allocation.
///
/// When the current segment is full, a new segment is appended (up to
/// `max_segments`). Allocations that span segment boundaries are placed
/// entirely in the next segment — there is no cross-segment splitting.
pub(crate) struct SegmentList {
    segments: Vec<Segment>,
    segment_size: u32,
    max_segments: u16,
    /// Index of the segment currently being filled.
    current: usize,
}

impl SegmentList {
    /// Create a new segment list with one pre-allocated segment.
    pub(crate) fn new(segment_size: u32, max_segments: u16) -> Self {
        let mut segments = Vec::with_capacity(max_segments as usize);
        segments.push(Segment::new(segment_size));
        Self {
            segments,
            segment_size,
            max_segments,
            current: 0,
        }
    }

    /// Bump-allocate `len` bytes, growing into a new segment if needed.
    ///
    /// Returns `Ok((segment_index, offset))` on success, or
    /// `Err(ArenaError::CapacityExceeded)` if the request exceeds a single
    /// segment or `max_segments` would be exceeded.
    pub(crate) fn alloc(&mut self, len: usize) -> Result<(u16, u32), ArenaError> {
        // Reject allocations that can never fit in a single segment.
        if len > self.segment_size as usize {
            return Err(ArenaError::CapacityExceeded {
                requested: len,
                capacity: self.segment_size as usize,
            });
        }
        let len = len as u32;

        // Try the current segment first.
        if let Some(offset) = self.segments[self.current].alloc(len) {
            return Ok((self.current as u16, offset));
        }

        // Current segment full — advance to the next existing segment or create one.
        let next = self.current + 1;
        if next < self.segments.len() {
            // Reuse a segment left over from before a reset.
            if let Some(offset) = self.segments[next].alloc(len) {
                self.current = next;
                return Ok((next as u16, offset));
            }
        }

        // Need a new segment.
        if self.segments.len() >= self.max_segments as usize {
            return Err(ArenaError::CapacityExceeded {
                requested: len as usize,
                capacity: self.total_capacity_bytes(),
            });
        }

        let mut seg = Segment::new(self.segment_size);
        // len <= segment_size is guaranteed by the check above.
        let offset = seg
            .alloc(len)
            .expect("len <= segment_size, so fresh segment always fits");
        self.segments.push(seg);
        self.current = self.segments.len() - 1;
        Ok((self.current as u16, offset))
    }

    /// Get a shared slice from the given segment at the given offset and length.
    pub(crate) fn slice(&self, segment_index: u16, offset: u32, len: u32) -> &[u8] {
        self.segments[segment_index as usize].slice(offset, len)
    }

    /// Get a mutable slice from the given segment at the given offset and length.
    pub(crate) fn slice_mut(&mut self, segment_index: u16, offset: u32, len: u32) -> &mut [u8] {
        self.segments[segment_index as usize].slice_mut(offset, len)
    }

    /// Copy `len` bytes between two allocated regions, possibly in
    /// different segments.
    ///
    /// Distinct blocks never overlap, but `copy_within` tolerates overlap
    /// anyway when source and destination share a segment.
    pub(crate) fn copy_between(
        &mut self,
        src_segment: u16,
        src_offset: u32,
        dst_segment: u16,
        dst_offset: u32,
        len: u32,
    ) {
        if len == 0 {
            return;
        }
        let si = src_segment as usize;
        let di = dst_segment as usize;
        if si == di {
            self.segments[si].copy_within(src_offset, dst_offset, len);
        } else if si < di {
            let (left, right) = self.segments.split_at_mut(di);
            let bytes = left[si].slice(src_offset, len);
            right[0].slice_mut(dst_offset, len).copy_from_slice(bytes);
        } else {
            let (left, right) = self.segments.split_at_mut(si);
            let bytes = right[0].slice(src_offset, len);
            left[di].slice_mut(dst_offset, len).copy_from_slice(bytes);
        }
    }

    /// Reset all segments' bump pointers without deallocating.
    ///
    /// After reset, allocations start from segment 0 again.
    pub(crate) fn reset(&mut self) {
        for seg in &mut self.segments {
            seg.reset();
        }
        self.current = 0;
    }

    /// Total number of segments currently allocated.
    pub(crate) fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total memory usage across all segments in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.segments.iter().map(|s| s.memory_bytes()).sum()
    }

    /// Total used bytes across all segments.
    pub(crate) fn total_used(&self) -> usize {
        self.segments.iter().map(|s| s.used()).sum()
    }

    fn total_capacity_bytes(&self) -> usize {
        self.segments.len() * self.segment_size as usize
    }
}
