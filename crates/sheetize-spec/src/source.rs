//! Descriptors for the images being arranged: independent tiles and
//! animation clips.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// An independent image cell in tileset mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tile {
    /// Tile identity (layer name, file name, ...).
    pub name: String,

    /// Tile width in pixels. Defaults to the sheet's frame width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Tile height in pixels. Defaults to the sheet's frame height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Tile {
    /// Creates a tile that fills the frame cell.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: None,
            height: None,
        }
    }

    /// Creates a tile with an explicit size.
    pub fn sized(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Resolves the tile size against the sheet's frame cell.
    pub fn size_in(&self, frame: Size) -> Size {
        Size::new(
            self.width.unwrap_or(frame.width),
            self.height.unwrap_or(frame.height),
        )
    }
}

/// A named animation: an ordered run of frames sharing the sheet's cell size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Clip {
    /// Clip name, emitted as the manifest state name.
    pub name: String,

    /// Number of frames in the clip.
    pub frame_count: u32,
}

impl Clip {
    /// Creates a new clip.
    pub fn new(name: impl Into<String>, frame_count: u32) -> Self {
        Self {
            name: name.into(),
            frame_count,
        }
    }

    /// Number of frames, i.e. the number of cells the clip occupies in a row.
    pub fn length(&self) -> u32 {
        self.frame_count
    }
}
