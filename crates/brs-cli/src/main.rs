/// BRS command-line tool: inspect, validate and decode `.brs` save files.
///
/// # Command overview
///
/// ```text
/// brs <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a header summary and the first few bricks
///   validate   Decode everything and report whether the save is well formed
///   decode     Write the decoded save as JSON
///   help       Print help information
///
/// Global options:
///   -v, --verbose               Log decoder activity to stderr
///   --max-segment-size <BYTES>  Reject segments declaring more than this
///   -h, --help                  Print help
///   -V, --version               Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// Logs and error details go to stderr so stdout can be piped cleanly.
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use brs_decoder::options::DEFAULT_MAX_SEGMENT_SIZE;
use brs_decoder::{BrsDecoder, ReadOptions};
use brs_types::Document;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Read Brickadia `.brs` (v3) save files.
#[derive(Parser)]
#[command(name = "brs", version, about = "BRS save file CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder activity (segments, header counts) to stderr.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Upper bound on any segment's declared uncompressed size, in bytes.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_SEGMENT_SIZE)]
    max_segment_size: usize,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a header summary and the first few bricks of a save.
    Inspect(InspectArgs),
    /// Decode a save completely, bricks included, and report the result.
    Validate(ValidateArgs),
    /// Write a decoded save as JSON.
    Decode(DecodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `brs inspect`.
///
/// ```text
/// ┌────────────┬────────────────────────────────────────────────────────┐
/// │ Flag       │ Effect                                                 │
/// ├────────────┼────────────────────────────────────────────────────────┤
/// │ --bricks N │ list the first N bricks (default 10, 0 skips bricks)  │
/// │ --raw      │ input is a bare container with no "BRS" preamble       │
/// └────────────┴────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the save file.
    pub file: PathBuf,

    /// Number of bricks to list.
    #[arg(long, default_value_t = 10)]
    pub bricks: usize,

    /// Treat the input as a bare container (no "BRS" preamble).
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `brs validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the save file.
    pub file: PathBuf,

    /// Treat the input as a bare container (no "BRS" preamble).
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `brs decode`.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────────────┐
/// │ Flag          │ Effect                                               │
/// ├───────────────┼──────────────────────────────────────────────────────┤
/// │ --no-bricks   │ stop after the headers; `bricks` is empty            │
/// │ --raw         │ input is a bare container with no "BRS" preamble     │
/// │ --pretty      │ indent the JSON                                      │
/// │ -o / --output │ write to a file instead of stdout                    │
/// └───────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the save file.
    pub file: PathBuf,

    /// Skip the brick segment.
    #[arg(long)]
    pub no_bricks: bool,

    /// Treat the input as a bare container (no "BRS" preamble).
    #[arg(long)]
    pub raw: bool,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Read and decode `path`, with or without the file preamble.
pub(crate) fn load(path: &Path, raw: bool, options: &ReadOptions) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), raw, "read save");

    let decoded = if raw {
        BrsDecoder::decode_with_options(&bytes, options)
    } else {
        BrsDecoder::decode_file(&bytes, options)
    };
    decoded.with_context(|| format!("failed to decode {}", path.display()))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ReadOptions {
        max_segment_size: cli.max_segment_size,
        ..ReadOptions::default()
    };

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args, &options),
        Commands::Validate(args) => cmd_validate::run(&args, &options),
        Commands::Decode(args) => cmd_decode::run(&args, &options),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
