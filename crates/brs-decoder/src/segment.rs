// Compressed segment extraction.
//
// A save is a sequence of segments, each framed as:
//
//   compressed_size (i32) │ uncompressed_size (i32) │ data [compressed_size]
//
// Equal sizes mean the writer stored the data raw. Otherwise the data is a
// zlib stream that must inflate to exactly `uncompressed_size` bytes.

use std::io::Read;

use brs_wire::ByteReader;
use flate2::read::ZlibDecoder;

use crate::error::DecodeError;

/// Pull the next segment out of `container` and return its decoded bytes.
///
/// The container cursor advances past the two size prefixes and the
/// `compressed_size` data bytes. The returned buffer is independent of the
/// container; decode it with a fresh cursor.
///
/// # Errors
///
/// - [`DecodeError::Wire`] if a prefix is negative or the data runs past
///   the end of the container.
/// - [`DecodeError::DecompressionBomb`] if `uncompressed_size` exceeds
///   `max_size`.
/// - [`DecodeError::DecompressFailed`] if the zlib stream is corrupt.
/// - [`DecodeError::SegmentSizeMismatch`] if the stream inflates to the
///   wrong length.
pub fn read_segment(container: &mut ByteReader<'_>, max_size: usize) -> Result<Vec<u8>, DecodeError> {
    let offset = container.position();
    let compressed_size = container.read_len()?;
    let uncompressed_size = container.read_len()?;

    if uncompressed_size > max_size {
        return Err(DecodeError::DecompressionBomb {
            declared: uncompressed_size,
            limit: max_size,
        });
    }

    let data = container.read_bytes(compressed_size)?;

    if compressed_size == uncompressed_size {
        tracing::debug!(offset, size = compressed_size, "raw segment");
        return Ok(data.to_vec());
    }

    let inflated = inflate(data, uncompressed_size)?;
    tracing::debug!(
        offset,
        compressed = compressed_size,
        uncompressed = uncompressed_size,
        "inflated segment"
    );
    Ok(inflated)
}

/// Inflate a zlib stream that must produce exactly `expected` bytes.
///
/// At most `expected + 1` bytes are pulled from the decoder, enough to
/// tell "too long" apart from "exact" without inflating the whole stream.
fn inflate(data: &[u8], expected: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(expected);
    ZlibDecoder::new(data)
        .take(expected as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::DecompressFailed(e.to_string()))?;

    if out.len() != expected {
        return Err(DecodeError::SegmentSizeMismatch {
            expected,
            actual: out.len(),
        });
    }
    Ok(out)
}
