//! Export requests: the complete input of one export invocation.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::options::{LayoutOptions, PackingStrategy};
use crate::source::{Clip, Tile};

/// Which kind of sheet an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetMode {
    /// Independent tiles on a near-square grid.
    Tileset,
    /// Animation clips packed into rows.
    Spritesheet,
}

impl SheetMode {
    /// Returns the mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetMode::Tileset => "tileset",
            SheetMode::Spritesheet => "spritesheet",
        }
    }

    /// Extension of the sidecar manifest file written next to the sheet.
    pub fn sidecar_extension(&self) -> &'static str {
        match self {
            SheetMode::Tileset => "clip",
            SheetMode::Spritesheet => "anim",
        }
    }
}

impl std::fmt::Display for SheetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tileset export parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TilesetRequest {
    /// Uniform cell size shared by every tile.
    pub frame: Size,

    /// Tiles in input order.
    pub tiles: Vec<Tile>,

    /// Layout options.
    #[serde(default)]
    pub options: LayoutOptions,
}

/// Spritesheet export parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpritesheetRequest {
    /// Uniform cell size shared by every frame of every clip.
    pub frame: Size,

    /// Clips in input order.
    pub clips: Vec<Clip>,

    /// Layout options. `invert_order` is ignored in this mode.
    #[serde(default)]
    pub options: LayoutOptions,

    /// Row packing strategy.
    #[serde(default)]
    pub packing: PackingStrategy,
}

/// A complete export request, tagged by `mode`.
///
/// ```
/// use sheetize_spec::{ExportRequest, SheetMode};
///
/// let request = ExportRequest::from_json(r#"{
///     "mode": "spritesheet",
///     "frame": { "width": 16, "height": 16 },
///     "clips": [ { "name": "walk", "frame_count": 4 } ]
/// }"#).unwrap();
/// assert_eq!(request.mode(), SheetMode::Spritesheet);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ExportRequest {
    /// Arrange independent tiles.
    Tileset(TilesetRequest),
    /// Pack animation clips.
    Spritesheet(SpritesheetRequest),
}

impl ExportRequest {
    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns the sheet mode.
    pub fn mode(&self) -> SheetMode {
        match self {
            ExportRequest::Tileset(_) => SheetMode::Tileset,
            ExportRequest::Spritesheet(_) => SheetMode::Spritesheet,
        }
    }

    /// Returns the layout options.
    pub fn options(&self) -> &LayoutOptions {
        match self {
            ExportRequest::Tileset(r) => &r.options,
            ExportRequest::Spritesheet(r) => &r.options,
        }
    }

    /// Returns the layout options for in-place overrides.
    pub fn options_mut(&mut self) -> &mut LayoutOptions {
        match self {
            ExportRequest::Tileset(r) => &mut r.options,
            ExportRequest::Spritesheet(r) => &mut r.options,
        }
    }

    /// Returns the frame cell size.
    pub fn frame(&self) -> Size {
        match self {
            ExportRequest::Tileset(r) => r.frame,
            ExportRequest::Spritesheet(r) => r.frame,
        }
    }
}
