//! Sheetize Layout Engine
//!
//! Pure layout computation for tilesets and spritesheets: how many columns
//! a tile grid gets, how animation clips pack into rows, where every tile and
//! frame lands in pixels, and what the sidecar manifest records. The
//! [`export`] module wires those steps together behind two collaborator
//! traits so the host decides how sheets are drawn and manifests stored.
//!
//! # Example
//!
//! ```
//! use sheetize_layout::{pack_clips, resolve_spritesheet};
//! use sheetize_spec::{Clip, LayoutOptions, PackingStrategy, Size};
//!
//! let clips = vec![Clip::new("walk", 4), Clip::new("idle", 2), Clip::new("hit", 2)];
//! let packed = pack_clips(&clips, PackingStrategy::BestFitDecreasing).unwrap();
//! assert_eq!(packed.capacity, 4);
//! assert_eq!(packed.row_count(), 2);
//!
//! let layout = resolve_spritesheet(&packed, Size::new(16, 16), &LayoutOptions::default()).unwrap();
//! assert_eq!(layout.sheet.size(), Size::new(64, 32));
//! ```
//!
//! # Modules
//!
//! - [`grid`]: Near-square grid sizing for tilesets
//! - [`pack`]: Clip row packing
//! - [`resolve`]: Pixel coordinate resolution
//! - [`manifest`]: Manifest construction
//! - [`placement`]: Placement plans for the compositor
//! - [`export`]: Orchestration and collaborator traits
//! - [`preview`]: Tile preview geometry
//! - [`slice`]: Cutting an existing sheet back into cells

pub mod export;
pub mod grid;
pub mod manifest;
pub mod pack;
pub mod placement;
pub mod preview;
pub mod resolve;
pub mod slice;

pub use export::{
    export, plan_export, sidecar_path, CanvasCompositor, CollaboratorError, ExportContext,
    ExportError, ExportSummary, ManifestSink, SheetShape,
};
pub use grid::{grid_dimensions, Grid};
pub use manifest::{build_manifest, build_spritesheet_manifest, build_tileset_manifest};
pub use pack::{pack_clips, PackedClip, PackedLayout, PackedRow};
pub use placement::{plan_spritesheet, plan_tileset, PlacementCommand, SheetPlan};
pub use preview::{preview_layout, PreviewCell, PreviewLayout, PreviewSource};
pub use resolve::{
    resolve_spritesheet, resolve_tileset, ClipSlot, ResolvedLayout, ScaledMetrics,
    SpritesheetLayout, TileSlot, TilesetLayout,
};
pub use slice::{slice_sheet, SlicedTile};
