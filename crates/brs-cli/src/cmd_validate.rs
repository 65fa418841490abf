/// Implementation of `brs validate`.
///
/// Decodes the whole save, bricks included, and prints a `✓` report, or a
/// single `✗` diagnostic on failure. A brick stream that ends before
/// `brick_count` is reported but does not fail validation, since the
/// decoder accepts it.
///
/// # Success output
///
/// ```text
/// ✓ Header: valid (BRS v3)
/// ✓ Segments: headers and brick segment decoded
/// ✓ Palettes: 1 mod, 3 assets, 3 colors, 4 materials, 3 owners
/// ✓ Bricks: 3 of 3 decoded
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: invalid header: invalid magic: expected "BRS", got [58, 52, 53]
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use brs_decoder::{BrsDecoder, DecodeError, ReadOptions};

use crate::ValidateArgs;

/// Run the `brs validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn run(args: &ValidateArgs, options: &ReadOptions) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let options = ReadOptions {
        bricks: true,
        ..options.clone()
    };
    let decoded = if args.raw {
        BrsDecoder::decode_with_options(&bytes, &options)
    } else {
        BrsDecoder::decode_file(&bytes, &options)
    };

    match decoded {
        Ok(doc) => {
            if args.raw {
                println!("✓ Header: none (bare container, assumed v{})", doc.version);
            } else {
                println!("✓ Header: valid (BRS v{})", doc.version);
            }
            println!("✓ Segments: headers and brick segment decoded");
            println!(
                "✓ Palettes: {} mods, {} assets, {} colors, {} materials, {} owners",
                doc.mods.len(),
                doc.brick_assets.len(),
                doc.colors.len(),
                doc.materials.len(),
                doc.brick_owners.len(),
            );
            let declared = usize::try_from(doc.brick_count).unwrap_or(0);
            println!("✓ Bricks: {} of {declared} decoded", doc.bricks.len());
            if doc.missing_bricks() > 0 {
                println!(
                    "  note: brick stream ended early, {} missing",
                    doc.missing_bricks()
                );
            }
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {}", diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Prefix each failure with the stage it came from.
///
/// ```text
/// ┌──────────────────────────────────┬───────────────────────────────┐
/// │ DecodeError variant              │ Diagnostic                    │
/// ├──────────────────────────────────┼───────────────────────────────┤
/// │ InvalidHeader                    │ "invalid header: <inner>"     │
/// │ DecompressFailed / SizeMismatch  │ "segment: <error>"            │
/// │ DecompressionBomb                │ "segment: <error>"            │
/// │ Wire                             │ "truncated or malformed: ..." │
/// └──────────────────────────────────┴───────────────────────────────┘
/// ```
fn diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::InvalidHeader(_) => e.to_string(),
        DecodeError::DecompressFailed(_)
        | DecodeError::SegmentSizeMismatch { .. }
        | DecodeError::DecompressionBomb { .. } => format!("segment: {e}"),
        DecodeError::Wire(inner) => format!("truncated or malformed: {inner}"),
    }
}
