use crate::byte_reader::ByteReader;
use crate::error::WireError;

/// Magic prefix of every save file: ASCII "BRS".
/// Stored as raw bytes so byte order never comes into it.
pub const BRS_MAGIC: [u8; 3] = *b"BRS";

/// Preamble size in bytes: 3 magic + 2 version.
pub const HEADER_SIZE: usize = 5;

/// The only save version this workspace decodes.
pub const SAVE_VERSION: u16 = 3;

/// File preamble that precedes the segment container on disk.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Offset │ Size    │ Description                  │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ 0x00   │ 3 bytes │ Magic: "BRS"                 │
/// │ 0x03   │ 2 bytes │ Version (u16, little-endian) │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
///
/// Everything after the preamble is the container: header segment 1,
/// header segment 2, then the brick segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveHeader {
    pub version: u16,
}

impl SaveHeader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
        }
    }

    /// Write the 5-byte preamble into `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if `buf` is shorter than
    /// [`HEADER_SIZE`].
    pub fn write_to(&self, buf: &mut [u8]) -> Result<(), WireError> {
        if buf.len() < HEADER_SIZE {
            return Err(WireError::UnexpectedEof {
                offset: buf.len(),
                needed: HEADER_SIZE - buf.len(),
            });
        }

        buf[0..3].copy_from_slice(&BRS_MAGIC);
        buf[3..5].copy_from_slice(&self.version.to_le_bytes());
        Ok(())
    }

    /// Parse and validate the preamble from the front of `reader`.
    ///
    /// Magic is checked before the version so a file that is not a save at
    /// all reports [`WireError::InvalidMagic`] rather than a version error.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if fewer than 5 bytes are available.
    /// - [`WireError::InvalidMagic`] if the first 3 bytes are not "BRS".
    /// - [`WireError::UnsupportedVersion`] for any version other than 3.
    pub fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        let found: [u8; 3] = reader.read_byte_array()?;
        if found != BRS_MAGIC {
            return Err(WireError::InvalidMagic { found });
        }

        let version = reader.read_u16()?;
        if version != SAVE_VERSION {
            return Err(WireError::UnsupportedVersion { version });
        }

        Ok(Self { version })
    }
}

impl Default for SaveHeader {
    fn default() -> Self {
        Self::new()
    }
}
