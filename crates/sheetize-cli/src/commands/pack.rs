//! Pack command implementation
//!
//! Prints how clips group into spritesheet rows.

use anyhow::Result;
use colored::Colorize;
use sheetize_layout::pack_clips;
use sheetize_spec::{Clip, PackingStrategy};
use std::process::ExitCode;

use super::json_output::{emit_error, CommandOutput, JsonError};

/// Run the pack command
///
/// # Arguments
/// * `clips` - Clips in input order
/// * `strategy` - Packing strategy
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(clips: &[Clip], strategy: PackingStrategy, json_output: bool) -> Result<ExitCode> {
    let layout = match pack_clips(clips, strategy) {
        Ok(layout) => layout,
        Err(e) if json_output => return emit_error(JsonError::from(&e)),
        Err(e) => return Err(e.into()),
    };

    if json_output {
        return CommandOutput::success(layout).emit();
    }

    println!(
        "{} {} clips, capacity {} ({})",
        "Packing:".cyan().bold(),
        clips.len(),
        layout.capacity,
        strategy
    );
    for (index, row) in layout.rows.iter().enumerate() {
        let names: Vec<String> = row
            .clips
            .iter()
            .map(|c| format!("{}({})", c.name, c.length))
            .collect();
        println!(
            "  row {} [{}/{}]: {}",
            index,
            row.used(),
            layout.capacity,
            names.join(" ")
        );
    }
    Ok(ExitCode::SUCCESS)
}
