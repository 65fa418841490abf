#![no_main]

use brs_decoder::{BrsDecoder, ReadOptions};
use libfuzzer_sys::fuzz_target;

// Fuzz target: bare container, bricks decoded.
//
// Catches bugs in:
// - Segment framing (negative or oversized length prefixes)
// - zlib inflation and the declared-size check
// - String and array decoding in both header segments
// - Bit-level brick decoding and the early-end tolerance
fuzz_target!(|data: &[u8]| {
    let options = ReadOptions {
        max_segment_size: 1 << 20,
        ..ReadOptions::with_bricks()
    };
    if let Ok(doc) = BrsDecoder::decode_with_options(data, &options) {
        assert!(doc.bricks.len() <= usize::try_from(doc.brick_count).unwrap_or(0));
    }
});
