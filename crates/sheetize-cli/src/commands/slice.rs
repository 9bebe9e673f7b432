//! Slice command implementation
//!
//! Lists the cells of an existing sheet.

use anyhow::Result;
use colored::Colorize;
use sheetize_layout::slice_sheet;
use sheetize_spec::{LayoutOptions, Size, Spacing};
use std::process::ExitCode;

use super::json_output::{emit_error, CommandOutput, JsonError};

/// Run the slice command
///
/// # Arguments
/// * `sheet` - Sheet image size
/// * `frame` - Cell size
/// * `offset` - Border around the sheet
/// * `spacing` - Gaps between cells
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    sheet: Size,
    frame: Size,
    offset: u32,
    spacing: Spacing,
    json_output: bool,
) -> Result<ExitCode> {
    let options = LayoutOptions::default()
        .with_offset(offset)
        .with_spacing(spacing);

    let tiles = match slice_sheet(sheet, frame, &options) {
        Ok(tiles) => tiles,
        Err(e) if json_output => return emit_error(JsonError::from(&e)),
        Err(e) => return Err(e.into()),
    };

    if json_output {
        return CommandOutput::success(tiles).emit();
    }

    println!(
        "{} {}x{} sheet, {}x{} cells",
        "Slicing:".cyan().bold(),
        sheet.width,
        sheet.height,
        frame.width,
        frame.height
    );
    if tiles.is_empty() {
        println!("  {} no full cell fits", "!".yellow());
    }
    for tile in &tiles {
        let b = tile.bounds;
        println!("  {:<10} ({}, {}) {}x{}", tile.name, b.left, b.top, b.width, b.height);
    }
    println!("{} {} cells", "Total:".dimmed(), tiles.len());
    Ok(ExitCode::SUCCESS)
}
