//! Preview command implementation
//!
//! Prints the preview canvas and cell layout for a tile.

use anyhow::Result;
use colored::Colorize;
use sheetize_layout::{preview_layout, PreviewSource};
use sheetize_spec::{PreviewMode, Scale, Size};
use std::process::ExitCode;

use super::json_output::{emit_error, CommandOutput, JsonError};

/// Run the preview command
///
/// # Arguments
/// * `mode` - Preview arrangement
/// * `tile` - Tile size
/// * `with_secondary` - Whether a secondary tile is shown
/// * `zoom` - Display zoom factor
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    mode: PreviewMode,
    tile: Size,
    with_secondary: bool,
    zoom: f64,
    json_output: bool,
) -> Result<ExitCode> {
    let layout =
        match Scale::zoom(zoom).and_then(|zoom| preview_layout(mode, tile, with_secondary, zoom)) {
            Ok(layout) => layout,
            Err(e) if json_output => return emit_error(JsonError::from(&e)),
            Err(e) => return Err(anyhow::Error::from(e)),
        };

    if json_output {
        return CommandOutput::success(layout).emit();
    }

    println!(
        "{} {} ({}x{} canvas, {}x{} cells)",
        "Preview:".cyan().bold(),
        layout.mode,
        layout.canvas.width,
        layout.canvas.height,
        layout.cell.width,
        layout.cell.height
    );
    for cell in &layout.cells {
        let label = match cell.source {
            PreviewSource::Primary => "primary".green(),
            PreviewSource::Secondary => "secondary".yellow(),
        };
        println!("  ({}, {}) {}", cell.x, cell.y, label);
    }
    Ok(ExitCode::SUCCESS)
}
