#![no_main]

use arbitrary::Arbitrary;
use brs_wire::BitReader;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Bit,
    Int(u8),
    IntMax(u32),
    UintPacked,
    IntPacked,
    Align,
    Bytes,
}

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    ops: Vec<Op>,
}

// Fuzz target: arbitrary read sequences against BitReader.
//
// The cursor must never move past the end of the buffer, and a failed
// fixed-width read must leave it where it was. Packed reads may stop
// partway through an integer.
fuzz_target!(|input: Input| {
    let mut bits = BitReader::new(&input.data);
    for op in &input.ops {
        let before = bits.bit_position();
        let ok = match *op {
            Op::Bit => bits.read_bit().is_ok(),
            Op::Int(n) => bits.read_int(u32::from(n % 33)).is_ok(),
            Op::IntMax(max) => bits.read_int_max(max).is_ok(),
            Op::UintPacked => bits.read_uint_packed().is_ok(),
            Op::IntPacked => bits.read_int_packed().is_ok(),
            Op::Align => {
                bits.align();
                true
            }
            Op::Bytes => bits.read_byte_array::<4>().is_ok(),
        };
        if !ok && !matches!(op, Op::UintPacked | Op::IntPacked) {
            assert_eq!(bits.bit_position(), before);
        }
        assert!(bits.bit_position() <= bits.bit_len());
    }
});
