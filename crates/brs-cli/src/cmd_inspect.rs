/// Implementation of `brs inspect`.
///
/// Decodes the headers (and, unless `--bricks 0`, the brick segment) and
/// prints a summary to stdout. Palette indices are resolved against the
/// decoded lists; an index with no entry prints as `?`.
///
/// # Output format
///
/// ```text
/// Save: BRS v3, map "Plate"
/// Author: "builder" 090a0b0c-0d0e-0f10-1112-131415161718
/// Description: "A small workshop"
/// Palettes: 1 mod, 3 assets, 3 colors, 4 materials, 3 owners
/// Bricks: 3 declared
/// Brick 0: PB_DefaultTile at (-120, 340, 6) size 5x5x6 ZPositive/Deg90
///          color #0c2238ff (palette 2), material BMC_Plastic, owner "second"
/// ---
/// showing 1 of 3 decoded bricks
/// ```
use anyhow::Result;
use brs_decoder::ReadOptions;
use brs_types::{Brick, BrickColor, Document};

use crate::InspectArgs;

/// Run the `brs inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn run(args: &InspectArgs, options: &ReadOptions) -> Result<()> {
    let options = ReadOptions {
        bricks: args.bricks > 0,
        ..options.clone()
    };
    let doc = crate::load(&args.file, args.raw, &options)?;

    println!("Save: BRS v{}, map {:?}", doc.version, doc.map);
    println!("Author: {:?} {}", doc.author.name, doc.author.id);
    println!("Description: {:?}", doc.description);
    println!(
        "Palettes: {}, {}, {}, {}, {}",
        plural(doc.mods.len(), "mod"),
        plural(doc.brick_assets.len(), "asset"),
        plural(doc.colors.len(), "color"),
        plural(doc.materials.len(), "material"),
        plural(doc.brick_owners.len(), "owner"),
    );
    println!("Bricks: {} declared", doc.brick_count);

    if !options.bricks {
        return Ok(());
    }

    for (idx, brick) in doc.bricks.iter().take(args.bricks).enumerate() {
        println!("Brick {idx}: {}", brick_line(&doc, brick));
        println!("         {}", brick_detail(&doc, brick));
    }

    println!("---");
    println!(
        "showing {} of {} decoded brick{}",
        doc.bricks.len().min(args.bricks),
        doc.bricks.len(),
        if doc.bricks.len() == 1 { "" } else { "s" }
    );
    if doc.missing_bricks() > 0 {
        println!(
            "brick stream ended early: {} declared bricks missing",
            doc.missing_bricks()
        );
    }

    Ok(())
}

// ── Brick formatting helpers ──────────────────────────────────────────────────

fn plural(n: usize, noun: &str) -> String {
    format!("{n} {noun}{}", if n == 1 { "" } else { "s" })
}

fn lookup(list: &[String], index: u32) -> &str {
    list.get(index as usize).map_or("?", String::as_str)
}

fn brick_line(doc: &Document, brick: &Brick) -> String {
    let [x, y, z] = brick.position;
    let size = if brick.has_default_size() {
        "default".to_string()
    } else {
        let [sx, sy, sz] = brick.size;
        format!("{sx}x{sy}x{sz}")
    };
    format!(
        "{} at ({x}, {y}, {z}) size {size} {:?}/{:?}",
        lookup(&doc.brick_assets, brick.asset_name_index),
        brick.direction,
        brick.rotation,
    )
}

fn brick_detail(doc: &Document, brick: &Brick) -> String {
    let color = match brick.color {
        BrickColor::Literal(color) => format!("{color} (literal)"),
        BrickColor::Palette(index) => match brick.color.resolve(&doc.colors) {
            Some(color) => format!("{color} (palette {index})"),
            None => format!("? (palette {index})"),
        },
    };
    let owner = doc
        .brick_owners
        .get(brick.owner_index as usize)
        .map_or("?", |u| u.name.as_str());

    let mut flags = String::new();
    if !brick.collision {
        flags.push_str(", no collision");
    }
    if !brick.visibility {
        flags.push_str(", hidden");
    }

    format!(
        "color {color}, material {}, owner {owner:?}{flags}",
        lookup(&doc.materials, brick.material_index),
    )
}
