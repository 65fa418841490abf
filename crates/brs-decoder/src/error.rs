use brs_wire::WireError;

/// Errors that can occur while decoding a save.
///
/// Every variant aborts the decode; no partial document is returned. The
/// one tolerated condition, a brick stream that ends before `brick_count`
/// records, is handled inside the brick loop and never surfaces here.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InvalidHeader(WireError)   ← "BRS" magic or version wrong
///   ├── SegmentSizeMismatch        ← inflated length != declared length
///   ├── DecompressFailed           ← zlib stream is corrupt
///   ├── DecompressionBomb          ← declared size exceeds the limit
///   └── Wire(WireError)            ← byte/bit cursor read out of bounds
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The 5-byte file preamble failed validation.
    #[error("invalid header: {0}")]
    InvalidHeader(WireError),

    /// A compressed segment inflated to a different length than its
    /// `uncompressed_size` prefix declared.
    #[error("segment inflated to {actual} bytes, expected {expected}")]
    SegmentSizeMismatch { expected: usize, actual: usize },

    /// zlib could not inflate a segment.
    #[error("zlib decompression failed: {0}")]
    DecompressFailed(String),

    /// A segment declares an uncompressed size above the configured
    /// [`ReadOptions::max_segment_size`](crate::ReadOptions::max_segment_size).
    #[error("segment size {declared} exceeds limit {limit}")]
    DecompressionBomb { declared: usize, limit: usize },

    /// A byte- or bit-level read ran out of input, or a length prefix was
    /// invalid.
    #[error(transparent)]
    Wire(#[from] WireError),
}
