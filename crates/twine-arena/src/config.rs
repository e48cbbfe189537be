//! Arena configuration parameters.

/// Configuration for the arena allocator.
///
/// Controls segment sizing and the total capacity ceiling. All values are
/// immutable after construction.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Size of each arena segment in bytes.
    ///
    /// Default: 65_536 (64KB). A single allocation larger than one segment
    /// is rejected with `CapacityExceeded`.
    pub segment_size: u32,

    /// Maximum number of segments.
    ///
    /// Default: 16, so the default total capacity is 1MB.
    pub max_segments: u16,
}

impl ArenaConfig {
    /// Default segment size: 64KB.
    pub const DEFAULT_SEGMENT_SIZE: u32 = 65_536;

    /// Default maximum segment count.
    pub const DEFAULT_MAX_SEGMENTS: u16 = 16;

    /// Create a config with the default sizing.
    pub fn new() -> Self {
        Self {
            segment_size: Self::DEFAULT_SEGMENT_SIZE,
            max_segments: Self::DEFAULT_MAX_SEGMENTS,
        }
    }

    /// Total capacity ceiling in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.segment_size as usize * self.max_segments as usize
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_1mb() {
        let config = ArenaConfig::new();
        assert_eq!(config.capacity_bytes(), 1024 * 1024);
    }

    #[test]
    fn custom_sizing_preserved() {
        let config = ArenaConfig {
            segment_size: 256,
            max_segments: 4,
        };
        assert_eq!(config.capacity_bytes(), 1024);
    }
}
