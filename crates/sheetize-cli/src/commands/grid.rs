//! Grid command implementation
//!
//! Prints the tileset grid shape for a tile count.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use sheetize_layout::grid_dimensions;
use std::process::ExitCode;

use super::json_output::{emit_error, CommandOutput, JsonError};

/// JSON result of the grid command.
#[derive(Debug, Serialize)]
pub struct GridResult {
    /// Number of tiles.
    pub count: usize,
    /// Grid columns.
    pub cols: u32,
    /// Grid rows.
    pub rows: u32,
    /// Unused trailing cells.
    pub empty_cells: u64,
}

/// Run the grid command
pub fn run(count: usize, json_output: bool) -> Result<ExitCode> {
    let grid = match grid_dimensions(count) {
        Ok(grid) => grid,
        Err(e) if json_output => return emit_error(JsonError::from(&e)),
        Err(e) => return Err(e.into()),
    };
    let empty_cells = grid.cells() - count as u64;

    if json_output {
        return CommandOutput::success(GridResult {
            count,
            cols: grid.cols,
            rows: grid.rows,
            empty_cells,
        })
        .emit();
    }

    println!(
        "{} {} tiles -> {} columns x {} rows",
        "Grid:".cyan().bold(),
        count,
        grid.cols,
        grid.rows
    );
    if empty_cells > 0 {
        println!("{} {} empty cells", "Note:".dimmed(), empty_cells);
    }
    Ok(ExitCode::SUCCESS)
}
