//! Edge case integration tests for the save decoder.
//!
//! - **Truncated brick stream**: fewer records than `brick_count` decode to
//!   a shorter list without error.
//! - **Malformed framing**: bad preambles, negative lengths and corrupt or
//!   mis-sized zlib streams abort the decode with a typed error.
//! - **Limits**: a segment declaring more than `max_segment_size` bytes is
//!   rejected before any inflation happens.

use brs_decoder::{BrsDecoder, DecodeError, ReadOptions};
use brs_tests::fixture::{
    SaveBuilder, SegmentCompression, encode_map_header, encode_palettes, frame_segment,
};
use brs_types::{Brick, BrickColor, Color, Document};
use brs_wire::WireError;
use brs_wire::header::SAVE_VERSION;

fn document(brick_count: i32, bricks: Vec<Brick>) -> Document {
    Document {
        version: SAVE_VERSION,
        map: "Edge".into(),
        brick_assets: vec!["PB_DefaultBrick".into()],
        colors: vec![Color::new(1, 2, 3, 255)],
        brick_count,
        bricks,
        ..Document::default()
    }
}

fn bricks(n: i32) -> Vec<Brick> {
    (0..n)
        .map(|i| Brick {
            position: [i, i, i],
            ..Brick::default()
        })
        .collect()
}

// ── Truncated brick stream ────────────────────────────────────────────────────

#[test]
fn short_brick_stream_is_tolerated() {
    let doc = document(10, bricks(4));
    let bytes = SaveBuilder::new().with_preamble().build(&doc);

    let decoded = BrsDecoder::decode_file(&bytes, &ReadOptions::with_bricks()).unwrap();
    assert_eq!(decoded.brick_count, 10);
    assert_eq!(decoded.bricks, doc.bricks);
    assert_eq!(decoded.missing_bricks(), 6);
}

#[test]
fn empty_brick_segment_yields_no_bricks() {
    let doc = document(3, Vec::new());
    let bytes = SaveBuilder::new().build(&doc);

    let decoded = BrsDecoder::decode_with_options(&bytes, &ReadOptions::with_bricks()).unwrap();
    assert!(decoded.bricks.is_empty());
    assert_eq!(decoded.missing_bricks(), 3);
}

#[test]
fn extra_records_beyond_count_are_ignored() {
    let mut doc = document(2, bricks(5));
    let bytes = SaveBuilder::new().build(&doc);

    let decoded = BrsDecoder::decode_with_options(&bytes, &ReadOptions::with_bricks()).unwrap();
    doc.bricks.truncate(2);
    assert_eq!(decoded.bricks, doc.bricks);
}

#[test]
fn negative_brick_count_decodes_nothing() {
    let doc = document(-4, bricks(2));
    let bytes = SaveBuilder::new().build(&doc);

    let decoded = BrsDecoder::decode_with_options(&bytes, &ReadOptions::with_bricks()).unwrap();
    assert_eq!(decoded.brick_count, -4);
    assert!(decoded.bricks.is_empty());
}

#[test]
fn record_cut_mid_way_is_an_error() {
    let doc = document(1, vec![Brick {
        color: BrickColor::Literal(Color::new(9, 8, 7, 6)),
        ..Brick::default()
    }]);
    let full = SaveBuilder::new()
        .compression(SegmentCompression::Raw)
        .without_brick_segment()
        .build(&doc);
    let brick_data = brs_tests::fixture::encode_bricks(&doc);

    let mut bytes = full;
    bytes.extend(frame_segment(&brick_data[..brick_data.len() - 2], SegmentCompression::Raw));

    let result = BrsDecoder::decode_with_options(&bytes, &ReadOptions::with_bricks());
    assert!(matches!(
        result,
        Err(DecodeError::Wire(WireError::BitsExhausted { .. }))
    ));
}

// ── Malformed framing ─────────────────────────────────────────────────────────

#[test]
fn wrong_magic_is_invalid_header() {
    let mut bytes = SaveBuilder::new().with_preamble().build(&document(0, Vec::new()));
    bytes[0] = b'X';

    let result = BrsDecoder::decode_file(&bytes, &ReadOptions::default());
    assert!(matches!(
        result,
        Err(DecodeError::InvalidHeader(WireError::InvalidMagic { .. }))
    ));
}

#[test]
fn unsupported_version_is_invalid_header() {
    let mut bytes = SaveBuilder::new().with_preamble().build(&document(0, Vec::new()));
    bytes[3..5].copy_from_slice(&9u16.to_le_bytes());

    let result = BrsDecoder::decode_file(&bytes, &ReadOptions::default());
    assert!(matches!(
        result,
        Err(DecodeError::InvalidHeader(WireError::UnsupportedVersion { version: 9 }))
    ));
}

#[test]
fn empty_input_is_an_error() {
    assert!(BrsDecoder::decode(&[]).is_err());
    assert!(BrsDecoder::decode_file(&[], &ReadOptions::default()).is_err());
}

#[test]
fn missing_header_two_is_an_error() {
    let doc = document(0, Vec::new());
    let bytes = frame_segment(&encode_map_header(&doc), SegmentCompression::Zlib);

    let result = BrsDecoder::decode(&bytes);
    assert!(matches!(
        result,
        Err(DecodeError::Wire(WireError::UnexpectedEof { .. }))
    ));
}

#[test]
fn missing_brick_segment_only_matters_when_requested() {
    let doc = document(1, bricks(1));
    let bytes = SaveBuilder::new().without_brick_segment().build(&doc);

    assert!(BrsDecoder::decode(&bytes).is_ok());
    assert!(matches!(
        BrsDecoder::decode_with_options(&bytes, &ReadOptions::with_bricks()),
        Err(DecodeError::Wire(WireError::UnexpectedEof { .. }))
    ));
}

#[test]
fn corrupt_zlib_segment_fails() {
    let doc = Document {
        description: "padding ".repeat(64),
        ..document(0, Vec::new())
    };
    let mut bytes = frame_segment(&encode_map_header(&doc), SegmentCompression::Zlib);
    // Clobber the zlib header of the first segment.
    bytes[8] = 0xFF;
    bytes[9] = 0xFF;
    bytes.extend(frame_segment(&encode_palettes(&doc), SegmentCompression::Zlib));

    assert!(matches!(
        BrsDecoder::decode(&bytes),
        Err(DecodeError::DecompressFailed(_))
    ));
}

#[test]
fn declared_size_mismatch_fails() {
    let doc = Document {
        description: "padding ".repeat(64),
        ..document(0, Vec::new())
    };
    let header = encode_map_header(&doc);
    let mut bytes = frame_segment(&header, SegmentCompression::Zlib);
    // Understate the uncompressed size by one byte.
    let declared = i32::try_from(header.len() - 1).unwrap();
    bytes[4..8].copy_from_slice(&declared.to_le_bytes());

    assert!(matches!(
        BrsDecoder::decode(&bytes),
        Err(DecodeError::SegmentSizeMismatch { .. })
    ));
}

#[test]
fn negative_array_count_fails() {
    let doc = document(0, Vec::new());
    let mut palettes = encode_palettes(&doc);
    // The mods count is the first field of header 2.
    palettes[0..4].copy_from_slice(&(-1i32).to_le_bytes());

    let mut bytes = frame_segment(&encode_map_header(&doc), SegmentCompression::Raw);
    bytes.extend(frame_segment(&palettes, SegmentCompression::Raw));

    assert!(matches!(
        BrsDecoder::decode(&bytes),
        Err(DecodeError::Wire(WireError::InvalidLength { length: -1, .. }))
    ));
}

// ── Limits ────────────────────────────────────────────────────────────────────

#[test]
fn oversized_segment_is_rejected() {
    let doc = Document {
        description: "x".repeat(4096),
        ..document(0, Vec::new())
    };
    let bytes = SaveBuilder::new().build(&doc);
    let options = ReadOptions {
        max_segment_size: 1024,
        ..ReadOptions::default()
    };

    assert!(matches!(
        BrsDecoder::decode_with_options(&bytes, &options),
        Err(DecodeError::DecompressionBomb { limit: 1024, .. })
    ));
}
