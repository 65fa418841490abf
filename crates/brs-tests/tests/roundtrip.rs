//! Roundtrip integration tests: build save bytes from a [`Document`] with
//! the fixture writer, decode them with [`BrsDecoder`], and compare.
//!
//! The writer emits exactly what the decoder expects, so a document whose
//! indices fit their palettes must come back unchanged. Any field that
//! differs points at a mismatch between the two sides of the bit layout.

use brs_decoder::{BrsDecoder, ReadOptions};
use brs_tests::fixture::{SaveBuilder, SegmentCompression};
use brs_types::{Brick, BrickColor, Color, Direction, Document, Rotation, User, Uuid};
use brs_wire::header::SAVE_VERSION;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn uuid(seed: u8) -> Uuid {
    let mut bytes = [0u8; 16];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = seed.wrapping_add(i as u8);
    }
    Uuid::from_bytes(bytes)
}

fn workshop() -> Document {
    let bricks = vec![
        Brick {
            asset_name_index: 1,
            size: [5, 5, 6],
            position: [-120, 340, 6],
            direction: Direction::ZPositive,
            rotation: Rotation::Deg90,
            color: BrickColor::Palette(2),
            owner_index: 1,
            ..Brick::default()
        },
        Brick {
            asset_name_index: 0,
            position: [0, 0, 18],
            direction: Direction::XNegative,
            rotation: Rotation::Deg270,
            collision: false,
            material_index: 3,
            color: BrickColor::Literal(Color::new(200, 30, 40, 255)),
            owner_index: 2,
            ..Brick::default()
        },
        Brick {
            asset_name_index: 2,
            size: [1000, 2, 70_000],
            position: [i32::MIN, i32::MAX, -1],
            direction: Direction::YNegative,
            rotation: Rotation::Deg180,
            visibility: false,
            material_index: 0,
            color: BrickColor::Palette(0),
            owner_index: 0,
            ..Brick::default()
        },
    ];

    Document {
        version: SAVE_VERSION,
        map: "Plate".into(),
        author: User {
            id: uuid(0x10),
            name: "builder".into(),
        },
        description: "A small workshop".into(),
        mods: vec!["Lights".into()],
        brick_assets: vec!["PB_DefaultBrick".into(), "PB_DefaultTile".into(), "PB_DefaultRamp".into()],
        colors: vec![
            Color::new(255, 255, 255, 255),
            Color::new(0, 0, 0, 255),
            Color::new(12, 34, 56, 255),
        ],
        materials: vec!["BMC_Hidden".into(), "BMC_Plastic".into(), "BMC_Glow".into(), "BMC_Metallic".into()],
        brick_owners: vec![
            User { id: uuid(0x20), name: "first".into() },
            User { id: uuid(0x30), name: "second".into() },
            User { id: uuid(0x40), name: "third".into() },
        ],
        brick_count: 3,
        bricks,
    }
}

fn decode(bytes: &[u8]) -> Document {
    BrsDecoder::decode_file(bytes, &ReadOptions::with_bricks())
        .unwrap_or_else(|e| panic!("decode failed: {e}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn zlib_save_roundtrips() {
    let doc = workshop();
    let bytes = SaveBuilder::new().with_preamble().build(&doc);
    assert_eq!(decode(&bytes), doc);
}

#[test]
fn raw_save_roundtrips() {
    let doc = workshop();
    let bytes = SaveBuilder::new()
        .compression(SegmentCompression::Raw)
        .with_preamble()
        .build(&doc);
    assert_eq!(decode(&bytes), doc);
}

#[test]
fn compressed_and_raw_decode_identically() {
    let doc = workshop();
    let zlib = SaveBuilder::new().with_preamble().build(&doc);
    let raw = SaveBuilder::new()
        .compression(SegmentCompression::Raw)
        .with_preamble()
        .build(&doc);
    assert_ne!(zlib, raw);
    assert_eq!(decode(&zlib), decode(&raw));
}

#[test]
fn bare_container_roundtrips() {
    let doc = workshop();
    let bytes = SaveBuilder::new().build(&doc);
    let decoded = BrsDecoder::decode_with_options(&bytes, &ReadOptions::with_bricks()).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn headers_only_without_bricks() {
    let doc = workshop();
    let bytes = SaveBuilder::new().without_brick_segment().build(&doc);

    // Default options never touch the (absent) brick segment.
    let decoded = BrsDecoder::decode(&bytes).unwrap();
    assert!(decoded.bricks.is_empty());
    assert_eq!(decoded.brick_count, 3);
    assert_eq!(
        Document {
            bricks: Vec::new(),
            ..doc
        },
        decoded
    );
}

#[test]
fn unicode_strings_roundtrip() {
    let doc = Document {
        version: SAVE_VERSION,
        map: "Château ✓".into(),
        description: "日本語の説明".into(),
        author: User {
            id: Uuid::NIL,
            name: "Zoë".into(),
        },
        ..Document::default()
    };
    let bytes = SaveBuilder::new().build(&doc);
    assert_eq!(BrsDecoder::decode(&bytes).unwrap(), doc);
}

#[test]
fn palette_indices_resolve_after_decode() {
    let doc = decode(&SaveBuilder::new().with_preamble().build(&workshop()));

    let first = &doc.bricks[0];
    assert_eq!(doc.brick_assets[first.asset_name_index as usize], "PB_DefaultTile");
    assert_eq!(first.color.resolve(&doc.colors), Some(Color::new(12, 34, 56, 255)));
    assert_eq!(doc.brick_owners[first.owner_index as usize].name, "second");

    let second = &doc.bricks[1];
    assert_eq!(second.color.resolve(&doc.colors), Some(Color::new(200, 30, 40, 255)));
    assert_eq!(doc.materials[second.material_index as usize], "BMC_Metallic");
}

#[test]
fn many_bricks_across_wide_palette() {
    // 40 colors need a 6-bit palette index.
    let colors: Vec<Color> = (0..40u8).map(|i| Color::new(i, i, i, 255)).collect();
    let bricks: Vec<Brick> = (0..500i32)
        .map(|i| Brick {
            position: [i * 10, -i * 10, i % 7],
            direction: Direction::from_index(i.unsigned_abs()),
            rotation: Rotation::from_index(i.unsigned_abs()),
            color: BrickColor::Palette(i.unsigned_abs() % 40),
            ..Brick::default()
        })
        .collect();

    let doc = Document {
        version: SAVE_VERSION,
        map: "Grid".into(),
        brick_assets: vec!["PB_DefaultBrick".into()],
        colors,
        brick_count: 500,
        bricks,
        ..Document::default()
    };

    let decoded = decode(&SaveBuilder::new().with_preamble().build(&doc));
    assert_eq!(decoded.bricks.len(), 500);
    assert_eq!(decoded, doc);
}
