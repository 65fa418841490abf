#![no_main]

use brs_tests::fixture::BitWriter;
use brs_wire::BitReader;
use libfuzzer_sys::fuzz_target;

// Fuzz target: packed and fixed-width integers written then read back.
fuzz_target!(|values: Vec<(u32, i32, u32)>| {
    let mut writer = BitWriter::new();
    for &(unsigned, signed, max) in &values {
        writer
            .write_uint_packed(unsigned)
            .write_int_packed(signed)
            .write_int_max(unsigned % max.max(1), max)
            .write_bit(signed < 0);
    }
    let bytes = writer.into_bytes();

    let mut reader = BitReader::new(&bytes);
    for &(unsigned, signed, max) in &values {
        assert_eq!(reader.read_uint_packed().unwrap(), unsigned);
        assert_eq!(reader.read_int_packed().unwrap(), signed);
        assert_eq!(reader.read_int_max(max).unwrap(), unsigned % max.max(1));
        assert_eq!(reader.read_bit().unwrap(), signed < 0);
    }
});
