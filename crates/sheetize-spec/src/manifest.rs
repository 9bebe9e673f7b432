//! Manifest types: the sidecar descriptor consumed by game engines.
//!
//! Every numeric field is in final (post-scale) pixels and is copied from the
//! resolved layout, so the manifest always agrees with the composed sheet.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Size, Spacing};
use crate::request::SheetMode;

/// Manifest describing a tileset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TilesetManifest {
    /// Border around the sheet.
    pub offset: u32,
    /// Gap between tiles.
    pub spacing: Spacing,
    /// Tile cell size.
    pub frame: Size,
    /// Number of tiles on the sheet.
    pub nframes: u32,
    /// Grid column count.
    pub tiles_per_row: u32,
    /// Region covered by tiles (excludes the outer border).
    pub bounds: Bounds,
}

/// Values shared by every state of a spritesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpritesheetDefaults {
    /// Frame cell size.
    pub frame: Size,
    /// Gap between frames.
    pub spacing: Spacing,
}

/// One animation clip on a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationState {
    /// Clip name.
    pub name: String,
    /// Span covering all frames of the clip.
    pub bounds: Bounds,
    /// Number of frames.
    pub nframes: u32,
}

/// Manifest describing a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpritesheetManifest {
    /// Shared frame metrics.
    pub defaults: SpritesheetDefaults,
    /// Clips in row-major, then column order.
    pub states: Vec<AnimationState>,
}

impl SpritesheetManifest {
    /// Looks up a state by name.
    pub fn state(&self, name: &str) -> Option<&AnimationState> {
        self.states.iter().find(|s| s.name == name)
    }
}

/// A sidecar manifest of either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Manifest {
    /// Tileset record.
    Tileset(TilesetManifest),
    /// Spritesheet record.
    Spritesheet(SpritesheetManifest),
}

impl Manifest {
    /// Returns the mode this manifest describes.
    pub fn mode(&self) -> SheetMode {
        match self {
            Manifest::Tileset(_) => SheetMode::Tileset,
            Manifest::Spritesheet(_) => SheetMode::Spritesheet,
        }
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a manifest of either mode from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
