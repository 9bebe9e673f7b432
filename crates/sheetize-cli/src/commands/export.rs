//! Export command implementation
//!
//! Loads a request file, applies command-line overrides, runs the layout
//! pipeline, and writes the placement plan plus the sidecar manifest.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use sheetize_layout::{export, ExportContext, ExportError, ExportSummary};
use sheetize_spec::{
    ExportRequest, LayoutError, Manifest, PackingStrategy, Scale, Spacing,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError};
use crate::collaborators::{PlanFileCompositor, SidecarManifestWriter};
use crate::input::{load_request, LoadResult, SourceKind};

/// Layout option overrides given on the command line.
///
/// Values set here win over the request file, which wins over defaults.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OptionOverrides {
    /// Border around the sheet in pixels (before scaling)
    #[arg(long)]
    pub offset: Option<u32>,

    /// Gap between cells on both axes (before scaling)
    #[arg(long)]
    pub spacing: Option<u32>,

    /// Horizontal gap between cells; overrides --spacing
    #[arg(long)]
    pub spacing_x: Option<u32>,

    /// Vertical gap between cells; overrides --spacing
    #[arg(long)]
    pub spacing_y: Option<u32>,

    /// Upscale factor applied to the whole sheet (>= 1)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Place tiles in reverse input order (tileset mode)
    #[arg(long)]
    pub invert_order: bool,

    /// Row packing strategy (spritesheet mode): best_fit_decreasing, sqrt_wrap
    #[arg(long)]
    pub packing: Option<PackingStrategy>,
}

impl OptionOverrides {
    /// Apply the overrides to `request` in place.
    pub fn apply(&self, request: &mut ExportRequest) -> Result<(), LayoutError> {
        let options = request.options_mut();
        if let Some(offset) = self.offset {
            options.offset = offset;
        }
        if let Some(gap) = self.spacing {
            options.spacing = Spacing::uniform(gap);
        }
        if let Some(gap) = self.spacing_x {
            options.spacing.horizontal = gap;
        }
        if let Some(gap) = self.spacing_y {
            options.spacing.vertical = gap;
        }
        if let Some(factor) = self.scale {
            options.scale = Scale::new(factor)?;
        }
        if self.invert_order {
            options.invert_order = true;
        }

        if let Some(packing) = self.packing {
            match request {
                ExportRequest::Spritesheet(r) => r.packing = packing,
                ExportRequest::Tileset(_) => {
                    log::warn!("--packing {} ignored for tileset requests", packing)
                }
            }
        }
        Ok(())
    }
}

/// JSON result of a successful export.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Export summary.
    #[serde(flatten)]
    pub summary: ExportSummary,
    /// Placement plan file.
    pub plan: PathBuf,
    /// Request file format.
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the request file.
    pub source_hash: String,
}

/// Run the export command
///
/// # Arguments
/// * `request_path` - Path to the request file (JSON or YAML)
/// * `output` - Path of the sheet image to produce
/// * `overrides` - Layout option overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    request_path: &str,
    output: &str,
    overrides: &OptionOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(request_path, output, overrides)
    } else {
        run_human(request_path, output, overrides)
    }
}

/// A rejected command-line override, reported as an argument error.
fn override_error(err: &LayoutError) -> JsonError {
    JsonError::new(
        error_codes::INVALID_ARGUMENT,
        format!("invalid command-line override: {}", err),
    )
}

/// Run the pipeline with the file-backed collaborators.
fn execute(request: &ExportRequest, output: &Path) -> Result<(ExportSummary, PathBuf), ExportError> {
    let mut compositor = PlanFileCompositor::new(output);
    let mut sink = SidecarManifestWriter::new();
    let summary = {
        let mut ctx = ExportContext::new(output, &mut compositor, &mut sink);
        export(request, &mut ctx)?
    };
    Ok((summary, compositor.path().to_path_buf()))
}

fn run_human(request_path: &str, output: &str, overrides: &OptionOverrides) -> Result<ExitCode> {
    println!("{} {}", "Exporting:".cyan().bold(), request_path);

    let LoadResult {
        mut request,
        source_kind,
        source_hash,
    } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;
    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        source_kind.as_str(),
        &source_hash[..16]
    );

    overrides
        .apply(&mut request)
        .context("Invalid command-line override")?;

    let (summary, plan) =
        execute(&request, Path::new(output)).with_context(|| format!("Export failed: {}", output))?;

    println!("{} {}", "Mode:".dimmed(), summary.mode);
    println!(
        "{} {} x {} cells",
        "Grid:".dimmed(),
        summary.shape.columns,
        summary.shape.rows
    );
    println!(
        "{} {}x{} px, {} placements",
        "Sheet:".dimmed(),
        summary.sheet.width,
        summary.sheet.height,
        summary.placements
    );
    if let Manifest::Spritesheet(m) = &summary.manifest {
        for state in &m.states {
            let b = state.bounds;
            println!(
                "  {} {:<16} {} frames at ({}, {}) {}x{}",
                "+".green(),
                state.name,
                state.nframes,
                b.left,
                b.top,
                b.width,
                b.height
            );
        }
    }
    println!("{} {}", "Plan:".dimmed(), plan.display());
    println!(
        "{} {} ({})",
        "Manifest:".dimmed(),
        summary.sidecar.display(),
        &summary.manifest_hash[..16]
    );
    println!("{}", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

fn run_json(request_path: &str, output: &str, overrides: &OptionOverrides) -> Result<ExitCode> {
    let LoadResult {
        mut request,
        source_kind,
        source_hash,
    } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = JsonError::from(&e).with_file(request_path);
            return CommandOutput::<ExportResult>::failure(vec![error]).emit();
        }
    };

    if let Err(e) = overrides.apply(&mut request) {
        return CommandOutput::<ExportResult>::failure(vec![override_error(&e)]).emit();
    }

    match execute(&request, Path::new(output)) {
        Ok((summary, plan)) => CommandOutput::success(ExportResult {
            summary,
            plan,
            source_kind,
            source_hash,
        })
        .emit(),
        Err(e) => {
            let error = JsonError::from(&e).with_file(request_path);
            CommandOutput::<ExportResult>::failure(vec![error]).emit()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetize_spec::{Clip, LayoutOptions, Size, SpritesheetRequest, Tile, TilesetRequest};

    fn spritesheet() -> ExportRequest {
        ExportRequest::Spritesheet(SpritesheetRequest {
            frame: Size::new(16, 16),
            clips: vec![Clip::new("walk", 4)],
            options: LayoutOptions::default().with_offset(5),
            packing: PackingStrategy::BestFitDecreasing,
        })
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut request = spritesheet();
        let overrides = OptionOverrides {
            spacing: Some(3),
            spacing_y: Some(7),
            scale: Some(2.0),
            packing: Some(PackingStrategy::SqrtWrap),
            ..Default::default()
        };
        overrides.apply(&mut request).unwrap();

        let options = request.options();
        assert_eq!(options.offset, 5);
        assert_eq!(options.spacing, Spacing::new(3, 7));
        assert_eq!(options.scale.factor(), 2.0);
        match request {
            ExportRequest::Spritesheet(r) => assert_eq!(r.packing, PackingStrategy::SqrtWrap),
            _ => panic!("expected spritesheet"),
        }
    }

    #[test]
    fn test_empty_overrides_leave_request_untouched() {
        let mut request = spritesheet();
        OptionOverrides::default().apply(&mut request).unwrap();
        assert_eq!(request, spritesheet());
    }

    #[test]
    fn test_invalid_scale_override() {
        let mut request = spritesheet();
        let overrides = OptionOverrides {
            scale: Some(0.5),
            ..Default::default()
        };
        assert!(matches!(
            overrides.apply(&mut request),
            Err(LayoutError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_bad_override_reported_as_argument_error() {
        let mut request = spritesheet();
        let overrides = OptionOverrides {
            scale: Some(0.0),
            ..Default::default()
        };
        let err = overrides.apply(&mut request).unwrap_err();
        let json = override_error(&err);
        assert_eq!(json.code, error_codes::INVALID_ARGUMENT);
        assert!(json.message.starts_with("invalid command-line override"));
    }

    #[test]
    fn test_execute_writes_plan_and_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("tiles.png");
        let request = ExportRequest::Tileset(TilesetRequest {
            frame: Size::new(8, 8),
            tiles: vec![Tile::new("a"), Tile::new("b")],
            options: LayoutOptions::default().with_invert_order(true),
        });

        let (summary, plan) = execute(&request, &output).unwrap();
        assert_eq!(plan, tmp.path().join("tiles.plan.json"));
        assert_eq!(summary.sidecar, tmp.path().join("tiles.clip"));
        assert!(plan.exists());
        assert!(summary.sidecar.exists());
        assert!(!output.exists());
    }
}
