use crate::error::WireError;

/// Forward-only cursor over a byte buffer.
///
/// All multi-byte integers are little-endian. Every read checks bounds
/// first and returns [`WireError::UnexpectedEof`] rather than truncating;
/// a failed primitive read leaves the cursor where it was.
///
/// ```text
///   buf: [ .. consumed .. | .. remaining .. ]
///                         ^ pos
/// ```
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume `n` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if n > self.remaining() {
            return Err(WireError::UnexpectedEof {
                offset: self.pos,
                needed: n - self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Consume exactly `N` bytes into a fixed-size array.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than `N` bytes remain.
    pub fn read_byte_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_le_bytes(self.read_byte_array()?))
    }

    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        Ok(i32::from_le_bytes(self.read_byte_array()?))
    }

    /// Read an i32 length prefix and reject negative values.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the prefix itself is truncated.
    /// - [`WireError::InvalidLength`] if the prefix is negative.
    pub fn read_len(&mut self) -> Result<usize, WireError> {
        let offset = self.pos;
        let length = self.read_i32()?;
        usize::try_from(length).map_err(|_| WireError::InvalidLength { length, offset })
    }

    /// Read a length-prefixed string.
    ///
    /// ```text
    ///   length (i32) │ payload
    ///
    ///   length == 0  → "" (no payload)
    ///   length  > 0  → `length` bytes of UTF-8
    ///   length  < 0  → `-length` UTF-16LE code units (2 bytes each)
    /// ```
    ///
    /// Strings written by the game carry a trailing NUL terminator, which
    /// is stripped. Malformed text is decoded lossily.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if the payload is truncated.
    pub fn read_string(&mut self) -> Result<String, WireError> {
        let length = self.read_i32()?;

        let mut text = match length {
            0 => return Ok(String::new()),
            n if n > 0 => {
                let bytes = self.read_bytes(n.unsigned_abs() as usize)?;
                String::from_utf8_lossy(bytes).into_owned()
            }
            n => {
                let units = n.unsigned_abs() as usize;
                let bytes = self.read_bytes(units * 2)?;
                let wide: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&wide)
            }
        };

        if text.ends_with('\0') {
            text.pop();
        }
        Ok(text)
    }

    /// Read a 16-byte identifier verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than 16 bytes remain.
    pub fn read_uuid(&mut self) -> Result<[u8; 16], WireError> {
        self.read_byte_array()
    }

    /// Read an i32 element count, then decode that many elements with `f`.
    ///
    /// The element decoder runs against this same cursor, so elements are
    /// laid out back to back. The error type is generic so callers can
    /// decode elements into their own domain types and errors.
    ///
    /// # Errors
    ///
    /// - [`WireError::InvalidLength`] if the count is negative.
    /// - Any error returned by `f`.
    pub fn read_array<T, E, F>(&mut self, mut f: F) -> Result<Vec<T>, E>
    where
        F: FnMut(&mut Self) -> Result<T, E>,
        E: From<WireError>,
    {
        let count = self.read_len()?;
        // The count is untrusted; never reserve more than the bytes left.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(f(self)?);
        }
        Ok(items)
    }
}
