use std::fmt;

use serde::{Serialize, Serializer};

/// A 128-bit identifier, kept exactly as it appeared on the wire.
///
/// The game writes a GUID as four little-endian `u32` words. The raw bytes
/// are preserved untouched; only the textual form swaps each word back to
/// big-endian so the string matches what the game displays:
///
/// ```text
///   wire:  0c 0b 0a 09 │ 10 0f 0e 0d │ ...
///   text:  090a0b0c-0d0e-0f10-...
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero identifier.
    pub const NIL: Self = Self([0; 16]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The raw wire bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut canonical = [0u8; 16];
        for (dst, src) in canonical.chunks_exact_mut(4).zip(self.0.chunks_exact(4)) {
            dst.copy_from_slice(src);
            dst.reverse();
        }

        for (i, byte) in canonical.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A player identity: the map author or a brick owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}
