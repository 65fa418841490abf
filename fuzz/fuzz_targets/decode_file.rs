#![no_main]

use brs_decoder::{BrsDecoder, ReadOptions};
use libfuzzer_sys::fuzz_target;

// Fuzz target: full decoder entry point, preamble included.
//
// The segment size limit is lowered so a hostile size prefix cannot make
// a single run allocate hundreds of megabytes.
fuzz_target!(|data: &[u8]| {
    let options = ReadOptions {
        max_segment_size: 1 << 20,
        ..ReadOptions::with_bricks()
    };
    let _ = BrsDecoder::decode_file(data, &options);
});
