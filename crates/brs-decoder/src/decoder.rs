use brs_types::brick::split_orientation;
use brs_types::{Brick, BrickColor, Color, Document, User, Uuid};
use brs_wire::header::{SAVE_VERSION, SaveHeader};
use brs_wire::{BitReader, ByteReader, WireError};

use crate::error::DecodeError;
use crate::options::ReadOptions;
use crate::segment;

/// Fields carried by header segment 1.
struct MapHeader {
    map: String,
    author: User,
    description: String,
    brick_count: i32,
}

/// Fields carried by header segment 2.
struct Palettes {
    mods: Vec<String>,
    brick_assets: Vec<String>,
    colors: Vec<Color>,
    materials: Vec<String>,
    brick_owners: Vec<User>,
}

/// Synchronous save decoder: parses a complete in-memory save.
///
/// Decoding is a single forward pass over the container:
///
///   1. **Header 1**: read a segment, then `map`, `author_name`,
///      `description`, `author_id`, `brick_count` from it.
///   2. **Header 2**: read a segment, then the `mods`, `brick_assets`,
///      `colors`, `materials` and `brick_owners` arrays from it.
///   3. **Bricks** (only with [`ReadOptions::bricks`]): read a segment and
///      decode up to `brick_count` bit-packed records from it.
///
/// Each segment gets its own cursor; only the container cursor is shared
/// across steps, so the order above is fixed.
///
/// # Example
///
/// ```rust,no_run
/// use brs_decoder::{BrsDecoder, ReadOptions};
///
/// let bytes = std::fs::read("build.brs").unwrap();
/// let save = BrsDecoder::decode_file(&bytes, &ReadOptions::with_bricks()).unwrap();
/// println!("{} by {}: {} bricks", save.map, save.author.name, save.bricks.len());
/// ```
pub struct BrsDecoder;

impl BrsDecoder {
    /// Decode a bare container (no "BRS" preamble) with default options.
    ///
    /// Bricks are not decoded; see [`decode_with_options`](Self::decode_with_options).
    ///
    /// # Errors
    ///
    /// See [`decode_with_options`](Self::decode_with_options).
    pub fn decode(container: &[u8]) -> Result<Document, DecodeError> {
        Self::decode_with_options(container, &ReadOptions::default())
    }

    /// Decode a bare container (no "BRS" preamble).
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] if any read runs past the end of the
    ///   container or a segment, or a length prefix is negative.
    /// - [`DecodeError::DecompressFailed`],
    ///   [`DecodeError::SegmentSizeMismatch`] or
    ///   [`DecodeError::DecompressionBomb`] if a segment cannot be inflated.
    pub fn decode_with_options(
        container: &[u8],
        options: &ReadOptions,
    ) -> Result<Document, DecodeError> {
        let mut reader = ByteReader::new(container);
        Self::decode_container(&mut reader, SAVE_VERSION, options)
    }

    /// Decode a save file: the 5-byte preamble followed by the container.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidHeader`] if the preamble is wrong, plus all
    /// errors from [`decode_with_options`](Self::decode_with_options).
    pub fn decode_file(bytes: &[u8], options: &ReadOptions) -> Result<Document, DecodeError> {
        let mut reader = ByteReader::new(bytes);
        let header = SaveHeader::read_from(&mut reader).map_err(DecodeError::InvalidHeader)?;
        Self::decode_container(&mut reader, header.version, options)
    }

    fn decode_container(
        container: &mut ByteReader<'_>,
        version: u16,
        options: &ReadOptions,
    ) -> Result<Document, DecodeError> {
        let header1 = segment::read_segment(container, options.max_segment_size)?;
        let header2 = segment::read_segment(container, options.max_segment_size)?;

        let map_header = Self::read_map_header(&header1)?;
        let palettes = Self::read_palettes(&header2)?;

        tracing::debug!(
            map = %map_header.map,
            brick_count = map_header.brick_count,
            assets = palettes.brick_assets.len(),
            colors = palettes.colors.len(),
            materials = palettes.materials.len(),
            owners = palettes.brick_owners.len(),
            "decoded headers"
        );

        let bricks = if options.bricks {
            let data = segment::read_segment(container, options.max_segment_size)?;
            Self::read_bricks(&data, map_header.brick_count, &palettes)?
        } else {
            Vec::new()
        };

        Ok(Document {
            version,
            map: map_header.map,
            author: map_header.author,
            description: map_header.description,
            mods: palettes.mods,
            brick_assets: palettes.brick_assets,
            colors: palettes.colors,
            materials: palettes.materials,
            brick_owners: palettes.brick_owners,
            brick_count: map_header.brick_count,
            bricks,
        })
    }

    fn read_map_header(data: &[u8]) -> Result<MapHeader, WireError> {
        let mut reader = ByteReader::new(data);
        let map = reader.read_string()?;
        let author_name = reader.read_string()?;
        let description = reader.read_string()?;
        let author_id = Uuid::from_bytes(reader.read_uuid()?);
        let brick_count = reader.read_i32()?;

        Ok(MapHeader {
            map,
            author: User {
                id: author_id,
                name: author_name,
            },
            description,
            brick_count,
        })
    }

    fn read_palettes(data: &[u8]) -> Result<Palettes, WireError> {
        let mut reader = ByteReader::new(data);
        let mods = reader.read_array(ByteReader::read_string)?;
        let brick_assets = reader.read_array(ByteReader::read_string)?;
        let colors = reader.read_array(|r| r.read_byte_array().map(Color::from_bgra))?;
        let materials = reader.read_array(ByteReader::read_string)?;
        let brick_owners = reader.read_array(|r| {
            let id = Uuid::from_bytes(r.read_uuid()?);
            let name = r.read_string()?;
            Ok::<_, WireError>(User { id, name })
        })?;

        Ok(Palettes {
            mods,
            brick_assets,
            colors,
            materials,
            brick_owners,
        })
    }

    /// Decode up to `brick_count` records from the brick segment.
    ///
    /// Every record starts on a byte boundary. If the stream is exhausted
    /// at a record boundary before `brick_count` records have been read,
    /// the records decoded so far are returned. A record cut off partway
    /// through is still an error.
    fn read_bricks(
        data: &[u8],
        brick_count: i32,
        palettes: &Palettes,
    ) -> Result<Vec<Brick>, WireError> {
        let declared = usize::try_from(brick_count).unwrap_or(0);
        let asset_bound = palette_bound(palettes.brick_assets.len());
        let color_bound = palette_bound(palettes.colors.len());

        let mut bits = BitReader::new(data);
        // Each record occupies at least one byte.
        let mut bricks = Vec::with_capacity(declared.min(data.len()));

        while bricks.len() < declared {
            bits.align();
            if bits.is_empty() {
                tracing::warn!(
                    decoded = bricks.len(),
                    declared,
                    "brick stream ended early"
                );
                break;
            }
            bricks.push(Self::read_brick(&mut bits, asset_bound, color_bound)?);
        }

        Ok(bricks)
    }

    /// Decode a single brick record.
    ///
    /// ```text
    /// ┌──────────────────┬──────────────────────────────────────────────┐
    /// │ Field            │ Encoding                                     │
    /// ├──────────────────┼──────────────────────────────────────────────┤
    /// │ asset_name_index │ int_max(asset count)                         │
    /// │ size             │ bit ? 3 × uint_packed : [0, 0, 0]            │
    /// │ position         │ 3 × int_packed                               │
    /// │ orientation      │ int(24) → direction, rotation                │
    /// │ collision        │ bit                                          │
    /// │ visibility       │ bit                                          │
    /// │ material_index   │ bit ? uint_packed : 1                        │
    /// │ color            │ bit ? 4 bytes BGRA : int_max(palette size)   │
    /// │ owner_index      │ uint_packed                                  │
    /// └──────────────────┴──────────────────────────────────────────────┘
    /// ```
    fn read_brick(
        bits: &mut BitReader<'_>,
        asset_bound: u32,
        color_bound: u32,
    ) -> Result<Brick, WireError> {
        let asset_name_index = bits.read_int_max(asset_bound)?;

        let size = if bits.read_bit()? {
            [
                bits.read_uint_packed()?,
                bits.read_uint_packed()?,
                bits.read_uint_packed()?,
            ]
        } else {
            [0; 3]
        };

        let position = [
            bits.read_int_packed()?,
            bits.read_int_packed()?,
            bits.read_int_packed()?,
        ];

        let (direction, rotation) = split_orientation(bits.read_int(24)?);
        let collision = bits.read_bit()?;
        let visibility = bits.read_bit()?;

        let material_index = if bits.read_bit()? {
            bits.read_uint_packed()?
        } else {
            1
        };

        let color = if bits.read_bit()? {
            BrickColor::Literal(Color::from_bgra(bits.read_byte_array()?))
        } else {
            BrickColor::Palette(bits.read_int_max(color_bound)?)
        };

        let owner_index = bits.read_uint_packed()?;

        Ok(Brick {
            asset_name_index,
            size,
            position,
            direction,
            rotation,
            collision,
            visibility,
            material_index,
            color,
            owner_index,
        })
    }
}

/// Palette length as a bit-width bound. Lists longer than `u32::MAX`
/// cannot come out of an i32-prefixed array, so saturating is exact.
fn palette_bound(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
