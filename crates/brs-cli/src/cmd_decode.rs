//! Implementation of `brs decode`: the decoded save as JSON on stdout or
//! in `-o <file>`.

use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use brs_decoder::ReadOptions;

use crate::DecodeArgs;

/// Run the `brs decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or the output
/// cannot be written.
pub fn run(args: &DecodeArgs, options: &ReadOptions) -> Result<()> {
    let options = ReadOptions {
        bricks: !args.no_bricks,
        ..options.clone()
    };
    let doc = crate::load(&args.file, args.raw, &options)?;

    let mut json = if args.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("failed to serialize document")?;
    json.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => {
            io::stdout()
                .write_all(json.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
