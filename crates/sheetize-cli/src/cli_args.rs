//! CLI argument definitions for the Sheetize command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use sheetize_cli::commands::export::OptionOverrides;
use sheetize_cli::commands::{parse_clip, parse_size};
use sheetize_spec::{Clip, PackingStrategy, PreviewMode, Size};

/// Sheetize - Tileset and Spritesheet Layout
#[derive(Parser)]
#[command(name = "sheetize")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Lay out a sheet from a request file and write its plan and manifest
    Export {
        /// Path to the request file (JSON or YAML)
        #[arg(short, long)]
        request: String,

        /// Path of the sheet image; the plan and manifest are written beside it
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        overrides: OptionOverrides,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the tileset grid shape for a tile count
    Grid {
        /// Number of tiles
        count: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Pack animation clips into rows
    Pack {
        /// Clip as NAME=FRAMES (repeatable)
        #[arg(short, long = "clip", value_parser = parse_clip, required = true)]
        clips: Vec<Clip>,

        /// Packing strategy: best_fit_decreasing, sqrt_wrap
        #[arg(long, default_value = "best_fit_decreasing")]
        packing: PackingStrategy,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the cells of an existing sheet
    Slice {
        /// Sheet size as WIDTHxHEIGHT
        #[arg(long, value_parser = parse_size)]
        sheet: Size,

        /// Cell size as WIDTHxHEIGHT
        #[arg(long, value_parser = parse_size)]
        frame: Size,

        /// Border around the sheet in pixels
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Gap between cells on both axes
        #[arg(long, default_value_t = 0)]
        spacing: u32,

        /// Horizontal gap; overrides --spacing
        #[arg(long)]
        spacing_x: Option<u32>,

        /// Vertical gap; overrides --spacing
        #[arg(long)]
        spacing_y: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show how a tile repeats next to its neighbours
    Preview {
        /// Arrangement: block, floor, columns, v-adjacent
        #[arg(short, long, default_value = "block")]
        mode: PreviewMode,

        /// Tile size as WIDTHxHEIGHT
        #[arg(long, value_parser = parse_size)]
        frame: Size,

        /// Show a secondary tile in the neighbouring cells
        #[arg(long)]
        with_secondary: bool,

        /// Display zoom factor
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
