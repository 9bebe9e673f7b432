//! Sheetize Canonical Types
//!
//! This crate provides the data model shared by the sheet layout engine and
//! its front ends: tile and clip descriptors, layout options, pixel geometry,
//! export requests, manifests, and input validation.
//!
//! # Example
//!
//! ```
//! use sheetize_spec::{Clip, ExportRequest, LayoutOptions, Size, Spacing, SpritesheetRequest};
//! use sheetize_spec::validation::validate_request;
//!
//! let request = ExportRequest::Spritesheet(SpritesheetRequest {
//!     frame: Size::new(16, 16),
//!     clips: vec![Clip::new("walk", 4), Clip::new("idle", 2)],
//!     options: LayoutOptions::default()
//!         .with_offset(2)
//!         .with_spacing(Spacing::uniform(1)),
//!     packing: Default::default(),
//! });
//!
//! assert!(validate_request(&request).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: The [`LayoutError`] taxonomy
//! - [`geometry`]: Sizes, spacing, bounding boxes, and the upscale factor
//! - [`options`]: Layout options plus packing and preview strategy variants
//! - [`source`]: Tile and clip descriptors
//! - [`request`]: Tagged export requests
//! - [`manifest`]: Sidecar manifest records
//! - [`validation`]: Input validation

pub mod error;
pub mod geometry;
pub mod manifest;
pub mod options;
pub mod request;
pub mod source;
pub mod validation;

pub use error::LayoutError;
pub use geometry::{Bounds, Scale, Size, Spacing};
pub use manifest::{
    AnimationState, Manifest, SpritesheetDefaults, SpritesheetManifest, TilesetManifest,
};
pub use options::{LayoutOptions, PackingStrategy, PreviewMode, UnknownVariant};
pub use request::{ExportRequest, SheetMode, SpritesheetRequest, TilesetRequest};
pub use source::{Clip, Tile};
