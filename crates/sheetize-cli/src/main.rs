//! Sheetize CLI - lays out tilesets and spritesheets
//!
//! This binary exports sheet layouts from request files and exposes the
//! individual layout steps (grid sizing, packing, slicing, preview) as
//! commands.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use sheetize_cli::{commands, logging};
use sheetize_spec::Spacing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match logging::init(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("failed to start logger: {}", e);
            None
        }
    };

    let result = match cli.command {
        Commands::Export {
            request,
            output,
            overrides,
            json,
        } => commands::export::run(&request, &output, &overrides, json),
        Commands::Grid { count, json } => commands::grid::run(count, json),
        Commands::Pack {
            clips,
            packing,
            json,
        } => commands::pack::run(&clips, packing, json),
        Commands::Slice {
            sheet,
            frame,
            offset,
            spacing,
            spacing_x,
            spacing_y,
            json,
        } => {
            let spacing = Spacing::new(spacing_x.unwrap_or(spacing), spacing_y.unwrap_or(spacing));
            commands::slice::run(sheet, frame, offset, spacing, json)
        }
        Commands::Preview {
            mode,
            frame,
            with_secondary,
            zoom,
            json,
        } => commands::preview::run(mode, frame, with_secondary, zoom, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
