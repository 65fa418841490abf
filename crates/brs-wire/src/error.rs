/// Errors raised by the byte and bit cursors.
///
/// Every variant is fatal to the decode that produced it. The one tolerated
/// condition in the format, an exhausted brick stream, is detected by
/// callers through [`BitReader::is_empty`](crate::BitReader::is_empty)
/// before a read is attempted, so it never reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A byte-level read would run past the end of the buffer.
    #[error("unexpected end of input at offset {offset} (needed {needed} more bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A bit-level read would run past the end of the buffer.
    #[error("bit stream exhausted at bit {bit_offset} of {bit_len}")]
    BitsExhausted { bit_offset: usize, bit_len: usize },

    /// A packed integer carried more than 32 bits of payload.
    #[error("packed integer exceeds 32 bits")]
    PackedIntTooLong,

    /// A length or count prefix was negative.
    #[error("invalid length prefix {length} at offset {offset}")]
    InvalidLength { length: i32, offset: usize },

    /// The file preamble did not start with "BRS".
    #[error("invalid magic: expected \"BRS\", got {found:02X?}")]
    InvalidMagic { found: [u8; 3] },

    /// The preamble names a save version this crate does not read.
    #[error("unsupported save version {version}")]
    UnsupportedVersion { version: u16 },
}
