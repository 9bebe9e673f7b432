//! Export orchestration.
//!
//! [`export`] runs the whole pipeline for one [`ExportRequest`]: validation,
//! grid sizing or packing, coordinate resolution, and manifest construction
//! all complete in memory before the two collaborators in the
//! [`ExportContext`] are called, each exactly once. Host state (output path,
//! compositor, manifest writer) reaches the pipeline only through that
//! context value.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sheetize_spec::validation::validate_request;
use sheetize_spec::{ExportRequest, LayoutError, Manifest, SheetMode, Size};
use thiserror::Error;

use crate::manifest::build_manifest;
use crate::pack::pack_clips;
use crate::placement::{plan_spritesheet, plan_tileset, SheetPlan};
use crate::resolve::{resolve_spritesheet, resolve_tileset, ResolvedLayout};

/// Error type returned by collaborators, surfaced unchanged.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Builds the sheet image from a placement plan.
pub trait CanvasCompositor {
    /// Compose the sheet. Called once per export.
    fn compose(&mut self, plan: &SheetPlan) -> Result<(), CollaboratorError>;
}

/// Persists a manifest next to the exported sheet.
pub trait ManifestSink {
    /// Write `manifest` to `path`. Called once per export, after composition
    /// succeeded.
    fn write(&mut self, path: &Path, manifest: &Manifest) -> Result<(), CollaboratorError>;
}

/// Everything an export needs from its host.
pub struct ExportContext<'a> {
    /// Path of the sheet image. The sidecar manifest path derives from it.
    pub output: PathBuf,
    /// Sheet image builder.
    pub compositor: &'a mut dyn CanvasCompositor,
    /// Manifest writer.
    pub sink: &'a mut dyn ManifestSink,
}

impl<'a> ExportContext<'a> {
    /// Creates a context writing to `output`.
    pub fn new(
        output: impl Into<PathBuf>,
        compositor: &'a mut dyn CanvasCompositor,
        sink: &'a mut dyn ManifestSink,
    ) -> Self {
        Self {
            output: output.into(),
            compositor,
            sink,
        }
    }
}

/// Errors raised by [`export`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// The request was rejected or the layout could not be computed.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The canvas compositor failed. No manifest was written.
    #[error("composition failed: {0}")]
    Composition(#[source] CollaboratorError),

    /// The manifest could not be serialized or written.
    #[error("manifest write failed: {0}")]
    Serialization(#[source] CollaboratorError),
}

impl ExportError {
    /// Returns the stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::Layout(e) => e.code(),
            ExportError::Composition(_) => "E101",
            ExportError::Serialization(_) => "E102",
        }
    }
}

/// Grid or packing shape of an exported sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetShape {
    /// Cell columns.
    pub columns: u32,
    /// Cell rows.
    pub rows: u32,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    /// Sheet mode.
    pub mode: SheetMode,
    /// Cell grid of the sheet.
    pub shape: SheetShape,
    /// Sheet size including the border.
    pub sheet: Size,
    /// Number of placement commands handed to the compositor.
    pub placements: usize,
    /// Path the manifest was written to.
    pub sidecar: PathBuf,
    /// BLAKE3 hash (hex) of the pretty-printed manifest.
    pub manifest_hash: String,
    /// The manifest itself.
    pub manifest: Manifest,
}

/// Path of the sidecar manifest for a sheet written to `output`.
///
/// ```
/// use std::path::Path;
/// use sheetize_layout::export::sidecar_path;
/// use sheetize_spec::SheetMode;
///
/// let path = sidecar_path(Path::new("out/hero.png"), SheetMode::Spritesheet);
/// assert_eq!(path, Path::new("out/hero.anim"));
/// ```
pub fn sidecar_path(output: &Path, mode: SheetMode) -> PathBuf {
    output.with_extension(mode.sidecar_extension())
}

/// Compute the layout, plan, and manifest for a request without calling any
/// collaborator.
pub fn plan_export(
    request: &ExportRequest,
) -> Result<(ResolvedLayout, SheetPlan, Manifest), LayoutError> {
    validate_request(request)?;

    let (layout, plan) = match request {
        ExportRequest::Tileset(r) => {
            let layout = resolve_tileset(r.tiles.len(), r.frame, &r.options)?;
            let plan = plan_tileset(&layout, &r.tiles, r.frame, r.options.scale)?;
            (ResolvedLayout::Tileset(layout), plan)
        }
        ExportRequest::Spritesheet(r) => {
            if r.options.invert_order {
                log::debug!("invert_order has no effect on spritesheets");
            }
            let packed = pack_clips(&r.clips, r.packing)?;
            let layout = resolve_spritesheet(&packed, r.frame, &r.options)?;
            let plan = plan_spritesheet(&layout, r.options.scale);
            (ResolvedLayout::Spritesheet(layout), plan)
        }
    };

    let manifest = build_manifest(&layout);
    Ok((layout, plan, manifest))
}

/// Run one export.
pub fn export(
    request: &ExportRequest,
    ctx: &mut ExportContext<'_>,
) -> Result<ExportSummary, ExportError> {
    let mode = request.mode();
    log::info!("exporting {} to {}", mode, ctx.output.display());

    let scale = request.options().scale;
    if !scale.is_integral() {
        log::warn!(
            "scale {} is not a whole number; sizes and positions will be truncated",
            scale
        );
    }

    let (layout, plan, manifest) = plan_export(request)?;
    let shape = match &layout {
        ResolvedLayout::Tileset(l) => SheetShape {
            columns: l.grid.cols,
            rows: l.grid.rows,
        },
        ResolvedLayout::Spritesheet(l) => SheetShape {
            columns: l.columns,
            rows: l.rows,
        },
    };
    log::info!(
        "resolved {}x{} cells, sheet {}x{}",
        shape.columns,
        shape.rows,
        plan.size.width,
        plan.size.height
    );

    // Serialized up front so an encoding failure never follows a composition.
    let manifest_json = manifest
        .to_json_pretty()
        .map_err(|e| ExportError::Serialization(Box::new(e)))?;
    let manifest_hash = blake3::hash(manifest_json.as_bytes()).to_hex().to_string();

    ctx.compositor
        .compose(&plan)
        .map_err(ExportError::Composition)?;

    let sidecar = sidecar_path(&ctx.output, mode);
    ctx.sink
        .write(&sidecar, &manifest)
        .map_err(ExportError::Serialization)?;
    log::info!("wrote manifest {}", sidecar.display());

    Ok(ExportSummary {
        mode,
        shape,
        sheet: plan.size,
        placements: plan.placements.len(),
        sidecar,
        manifest_hash,
        manifest,
    })
}
