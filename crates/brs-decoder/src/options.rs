/// Default upper bound on a single segment's uncompressed size (256 MiB).
pub const DEFAULT_MAX_SEGMENT_SIZE: usize = 256 * 1024 * 1024;

/// Settings for a single decode call.
///
/// ```text
/// ┌──────────────────┬──────────┬───────────────────────────────────────┐
/// │ Field            │ Default  │ Effect                                │
/// ├──────────────────┼──────────┼───────────────────────────────────────┤
/// │ bricks           │ false    │ decode the brick segment              │
/// │ max_segment_size │ 256 MiB  │ reject larger declared segment sizes  │
/// └──────────────────┴──────────┴───────────────────────────────────────┘
/// ```
///
/// Decoding bricks is the expensive part of a save, so it is opt-in. With
/// `bricks` unset the brick segment is never read: `Document::bricks` stays
/// empty and the container cursor stops after header 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    pub bricks: bool,
    pub max_segment_size: usize,
}

impl ReadOptions {
    /// Default options with brick decoding enabled.
    #[must_use]
    pub fn with_bricks() -> Self {
        Self {
            bricks: true,
            ..Self::default()
        }
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            bricks: false,
            max_segment_size: DEFAULT_MAX_SEGMENT_SIZE,
        }
    }
}
