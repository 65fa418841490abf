/// Width of one data group in a packed unsigned integer.
///
/// Each group on the wire is `[continuation: 1 bit][data: 4 bits]`, least
/// significant group first.
pub const PACKED_GROUP_BITS: u32 = 4;

/// Maximum number of groups a packed `u32` can occupy.
/// 32 / 4 = 8 groups.
pub const MAX_PACKED_GROUPS: u32 = u32::BITS / PACKED_GROUP_BITS;

/// Number of bits needed to store any value in `[0, max)`.
///
/// Computes `ceil(log2(max(max, 2)))`. The floor of 2 guarantees that
/// bounded reads always consume at least one bit, even for empty or
/// single-entry palettes. Every bounded read in the brick stream (asset
/// index, palette color index) goes through this function.
///
/// | `max` | bits |
/// |-------|------|
/// | 0     | 1    |
/// | 1     | 1    |
/// | 2     | 1    |
/// | 3     | 2    |
/// | 17    | 5    |
/// | 256   | 8    |
/// | 257   | 9    |
#[must_use]
pub const fn bit_width(max: u32) -> u32 {
    let bound = if max < 2 { 2 } else { max };
    u32::BITS - (bound - 1).leading_zeros()
}

/// Map a zigzag-encoded magnitude back to a signed value.
///
/// Even magnitudes map to non-negative values (`v / 2`), odd magnitudes map
/// to negative values (`-(v + 1) / 2`):
///
/// ```text
///   0 → 0,  1 → -1,  2 → 1,  3 → -2,  4 → 2, ...
/// ```
#[must_use]
pub const fn zigzag_decode(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Inverse of [`zigzag_decode`].
#[must_use]
pub const fn zigzag_encode(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}
