use crate::error::WireError;
use crate::packed::{MAX_PACKED_GROUPS, PACKED_GROUP_BITS, bit_width, zigzag_decode};

/// Forward-only cursor over a byte buffer at bit granularity.
///
/// Bits are consumed least-significant first within each byte, and
/// multi-bit integers are assembled least-significant bit first:
///
/// ```text
///   byte 0                    byte 1
///   b7 b6 b5 b4 b3 b2 b1 b0 │ b7 b6 b5 b4 b3 b2 b1 b0
///   ◄──────────── read order starts at byte 0, bit 0
/// ```
///
/// The position is tracked as a single bit index (`byte * 8 + bit`).
/// Records in the brick stream are packed without padding, so callers
/// must [`align`](Self::align) explicitly between independent records.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current position in bits from the start of the buffer.
    #[must_use]
    pub fn bit_position(&self) -> usize {
        self.pos
    }

    /// Total length of the buffer in bits.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.buf.len() * 8
    }

    /// True once every bit has been consumed.
    ///
    /// This is the truncation check for the brick stream: callers test it
    /// before starting a record rather than treating the end of data as an
    /// error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.bit_len()
    }

    fn exhausted(&self, wanted: usize) -> Result<(), WireError> {
        if self.pos + wanted > self.bit_len() {
            return Err(WireError::BitsExhausted {
                bit_offset: self.pos,
                bit_len: self.bit_len(),
            });
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`WireError::BitsExhausted`] at the end of the buffer.
    pub fn read_bit(&mut self) -> Result<bool, WireError> {
        self.exhausted(1)?;
        let bit = (self.buf[self.pos >> 3] >> (self.pos & 7)) & 1;
        self.pos += 1;
        Ok(bit != 0)
    }

    /// Read an unsigned integer of exactly `bits` bits (at most 32).
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BitsExhausted`] if fewer than `bits` bits
    /// remain; the cursor does not move in that case.
    pub fn read_int(&mut self, bits: u32) -> Result<u32, WireError> {
        debug_assert!(bits <= u32::BITS, "read_int supports at most 32 bits");
        self.exhausted(bits as usize)?;
        let mut value = 0u32;
        for i in 0..bits {
            if self.read_bit()? {
                value |= 1 << i;
            }
        }
        Ok(value)
    }

    /// Read an index in `[0, max)` using [`bit_width`]`(max)` bits.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BitsExhausted`] if the stream ends.
    pub fn read_int_max(&mut self, max: u32) -> Result<u32, WireError> {
        self.read_int(bit_width(max))
    }

    /// Read a variable-length unsigned integer.
    ///
    /// ```text
    ///   [more][d0 d1 d2 d3] [more][d4 d5 d6 d7] ...
    /// ```
    ///
    /// Each 4-bit group is preceded by a continuation bit and groups are
    /// accumulated least significant first. Decoding stops after the first
    /// group whose continuation bit is clear.
    ///
    /// # Errors
    ///
    /// - [`WireError::BitsExhausted`] if the stream ends mid-integer.
    /// - [`WireError::PackedIntTooLong`] if more than 8 groups are chained.
    pub fn read_uint_packed(&mut self) -> Result<u32, WireError> {
        let mut value = 0u32;
        for group in 0..MAX_PACKED_GROUPS {
            let more = self.read_bit()?;
            value |= self.read_int(PACKED_GROUP_BITS)? << (group * PACKED_GROUP_BITS);
            if !more {
                return Ok(value);
            }
        }
        Err(WireError::PackedIntTooLong)
    }

    /// Read a zigzag-encoded signed packed integer.
    ///
    /// # Errors
    ///
    /// Same as [`read_uint_packed`](Self::read_uint_packed).
    pub fn read_int_packed(&mut self) -> Result<i32, WireError> {
        self.read_uint_packed().map(zigzag_decode)
    }

    /// Skip forward to the next byte boundary. No-op when already aligned.
    pub fn align(&mut self) {
        self.pos = (self.pos + 7) & !7;
    }

    /// Read `N` whole byte values from the current bit position.
    ///
    /// Literal bytes embedded in a packed record (such as a direct color)
    /// follow a flag bit, so they are not byte-aligned; each byte is read
    /// as eight consecutive bits.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BitsExhausted`] if fewer than `N * 8` bits remain.
    pub fn read_byte_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        self.exhausted(N * 8)?;
        let mut out = [0u8; N];
        for byte in &mut out {
            *byte = self.read_int(8)? as u8;
        }
        Ok(out)
    }
}
