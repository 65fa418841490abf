use std::io::Write;

use brs_types::brick::join_orientation;
use brs_types::{Brick, BrickColor, Document};
use brs_wire::header::{HEADER_SIZE, SaveHeader};
use brs_wire::packed::{MAX_PACKED_GROUPS, PACKED_GROUP_BITS, bit_width, zigzag_encode};
use flate2::Compression;
use flate2::write::ZlibEncoder;

/// How the fixture writer stores each segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentCompression {
    /// Store raw (`compressed_size == uncompressed_size`).
    Raw,
    /// zlib-compress; falls back to raw if the stream would come out the
    /// same length, since equal sizes mean "raw" on the wire.
    Zlib,
}

/// LSB-first bit writer, the inverse of `brs_wire::BitReader`.
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn write_bit(&mut self, on: bool) -> &mut Self {
        if self.bit_len % 8 == 0 {
            self.bytes.push(0);
        }
        if on {
            self.bytes[self.bit_len / 8] |= 1 << (self.bit_len % 8);
        }
        self.bit_len += 1;
        self
    }

    pub fn write_int(&mut self, value: u32, bits: u32) -> &mut Self {
        for i in 0..bits {
            self.write_bit((value >> i) & 1 != 0);
        }
        self
    }

    pub fn write_int_max(&mut self, value: u32, max: u32) -> &mut Self {
        self.write_int(value, bit_width(max))
    }

    pub fn write_uint_packed(&mut self, mut value: u32) -> &mut Self {
        for _ in 0..MAX_PACKED_GROUPS {
            let group = value & 0xF;
            value >>= PACKED_GROUP_BITS;
            self.write_bit(value != 0).write_int(group, PACKED_GROUP_BITS);
            if value == 0 {
                break;
            }
        }
        self
    }

    pub fn write_int_packed(&mut self, value: i32) -> &mut Self {
        self.write_uint_packed(zigzag_encode(value))
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        for &byte in bytes {
            self.write_int(u32::from(byte), 8);
        }
        self
    }

    pub fn align(&mut self) -> &mut Self {
        self.bit_len = self.bytes.len() * 8;
        self
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn len_prefix(len: usize) -> [u8; 4] {
    i32::try_from(len)
        .expect("fixture length fits in i32")
        .to_le_bytes()
}

/// Write a string the way the game does: UTF-8 with a NUL terminator
/// counted in the length, or a bare zero length for "".
pub fn write_string(buf: &mut Vec<u8>, s: &str) {
    if s.is_empty() {
        buf.extend_from_slice(&0i32.to_le_bytes());
        return;
    }
    buf.extend_from_slice(&len_prefix(s.len() + 1));
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
}

/// Header segment 1 payload.
#[must_use]
pub fn encode_map_header(doc: &Document) -> Vec<u8> {
    let mut buf = Vec::new();
    write_string(&mut buf, &doc.map);
    write_string(&mut buf, &doc.author.name);
    write_string(&mut buf, &doc.description);
    buf.extend_from_slice(doc.author.id.as_bytes());
    buf.extend_from_slice(&doc.brick_count.to_le_bytes());
    buf
}

/// Header segment 2 payload.
#[must_use]
pub fn encode_palettes(doc: &Document) -> Vec<u8> {
    let mut buf = Vec::new();

    for list in [&doc.mods, &doc.brick_assets] {
        buf.extend_from_slice(&len_prefix(list.len()));
        for s in list {
            write_string(&mut buf, s);
        }
    }

    buf.extend_from_slice(&len_prefix(doc.colors.len()));
    for color in &doc.colors {
        buf.extend_from_slice(&color.to_bgra());
    }

    buf.extend_from_slice(&len_prefix(doc.materials.len()));
    for s in &doc.materials {
        write_string(&mut buf, s);
    }

    buf.extend_from_slice(&len_prefix(doc.brick_owners.len()));
    for owner in &doc.brick_owners {
        buf.extend_from_slice(owner.id.as_bytes());
        write_string(&mut buf, &owner.name);
    }

    buf
}

fn bound(len: usize) -> u32 {
    u32::try_from(len).expect("fixture palette fits in u32")
}

/// Append one brick record. The caller aligns between records.
pub fn write_brick(bits: &mut BitWriter, brick: &Brick, assets: usize, colors: usize) {
    bits.write_int_max(brick.asset_name_index, bound(assets));

    bits.write_bit(!brick.has_default_size());
    if !brick.has_default_size() {
        for &axis in &brick.size {
            bits.write_uint_packed(axis);
        }
    }

    for &axis in &brick.position {
        bits.write_int_packed(axis);
    }

    bits.write_int(join_orientation(brick.direction, brick.rotation), 24)
        .write_bit(brick.collision)
        .write_bit(brick.visibility);

    if brick.material_index == 1 {
        bits.write_bit(false);
    } else {
        bits.write_bit(true).write_uint_packed(brick.material_index);
    }

    match brick.color {
        BrickColor::Literal(color) => {
            bits.write_bit(true).write_bytes(&color.to_bgra());
        }
        BrickColor::Palette(index) => {
            bits.write_bit(false).write_int_max(index, bound(colors));
        }
    }

    bits.write_uint_packed(brick.owner_index);
}

/// Brick segment payload: every record in `doc.bricks`, byte-aligned.
#[must_use]
pub fn encode_bricks(doc: &Document) -> Vec<u8> {
    let mut bits = BitWriter::new();
    for brick in &doc.bricks {
        bits.align();
        write_brick(&mut bits, brick, doc.brick_assets.len(), doc.colors.len());
    }
    bits.into_bytes()
}

/// Frame `data` as a segment: both size prefixes, then the stored bytes.
#[must_use]
pub fn frame_segment(data: &[u8], compression: SegmentCompression) -> Vec<u8> {
    let stored = match compression {
        SegmentCompression::Raw => data.to_vec(),
        SegmentCompression::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data).expect("write to Vec cannot fail");
            let compressed = encoder.finish().expect("finish to Vec cannot fail");
            if compressed.len() == data.len() {
                data.to_vec()
            } else {
                compressed
            }
        }
    };

    let mut buf = Vec::with_capacity(8 + stored.len());
    buf.extend_from_slice(&len_prefix(stored.len()));
    buf.extend_from_slice(&len_prefix(data.len()));
    buf.extend_from_slice(&stored);
    buf
}

/// Builds save bytes from a [`Document`].
///
/// ```text
///   [preamble?] │ header 1 │ header 2 │ [brick segment?]
/// ```
///
/// `Document::brick_count` is written as declared, so a document whose
/// `bricks` list is shorter than `brick_count` produces a truncated brick
/// stream.
#[derive(Clone, Debug)]
pub struct SaveBuilder {
    compression: SegmentCompression,
    preamble: bool,
    brick_segment: bool,
}

impl Default for SaveBuilder {
    fn default() -> Self {
        Self {
            compression: SegmentCompression::Zlib,
            preamble: false,
            brick_segment: true,
        }
    }
}

impl SaveBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn compression(mut self, compression: SegmentCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Prefix the output with the 5-byte "BRS" preamble.
    #[must_use]
    pub fn with_preamble(mut self) -> Self {
        self.preamble = true;
        self
    }

    /// Stop after header 2.
    #[must_use]
    pub fn without_brick_segment(mut self) -> Self {
        self.brick_segment = false;
        self
    }

    #[must_use]
    pub fn build(&self, doc: &Document) -> Vec<u8> {
        let mut out = Vec::new();

        if self.preamble {
            let mut preamble = [0u8; HEADER_SIZE];
            SaveHeader::new()
                .write_to(&mut preamble)
                .expect("preamble buffer is HEADER_SIZE");
            out.extend_from_slice(&preamble);
        }

        out.extend(frame_segment(&encode_map_header(doc), self.compression));
        out.extend(frame_segment(&encode_palettes(doc), self.compression));
        if self.brick_segment {
            out.extend(frame_segment(&encode_bricks(doc), self.compression));
        }
        out
    }
}
