#![no_main]

use brs_wire::ByteReader;
use brs_wire::header::SaveHeader;
use libfuzzer_sys::fuzz_target;

// Fuzz target: SaveHeader::read_from with arbitrary bytes.
fuzz_target!(|data: &[u8]| {
    let _ = SaveHeader::read_from(&mut ByteReader::new(data));
});
