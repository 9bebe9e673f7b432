//! Placement plans handed to the canvas compositor.

use serde::{Deserialize, Serialize};
use sheetize_spec::{LayoutError, Scale, Size, Tile};

use crate::resolve::{SpritesheetLayout, TilesetLayout};

/// Copy one source image into the sheet at the given scaled box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCommand {
    /// Tile or clip name.
    pub source: String,
    /// Frame position within the clip (spritesheet mode only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_index: Option<u32>,
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width after scaling.
    pub width: u32,
    /// Height after scaling.
    pub height: u32,
}

/// Everything the compositor needs to build the sheet image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetPlan {
    /// Sheet canvas size.
    pub size: Size,
    /// Uniform upscale factor the compositor applies to each source.
    pub scale: f64,
    /// Commands in placement order.
    pub placements: Vec<PlacementCommand>,
}

/// Build the plan for a tileset.
///
/// `tiles` is the caller's input list that `layout` was resolved for. A tile
/// smaller than the frame cell is anchored at the cell's top-left corner.
pub fn plan_tileset(
    layout: &TilesetLayout,
    tiles: &[Tile],
    frame: Size,
    scale: Scale,
) -> Result<SheetPlan, LayoutError> {
    if tiles.len() != layout.tiles.len() {
        return Err(LayoutError::InvalidOption(format!(
            "layout was resolved for {} tiles but {} were supplied",
            layout.tiles.len(),
            tiles.len()
        )));
    }

    let placements = layout
        .tiles
        .iter()
        .map(|slot| {
            let tile = &tiles[slot.source_index];
            let size = tile.size_in(frame);
            Ok(PlacementCommand {
                source: tile.name.clone(),
                frame_index: None,
                x: slot.bounds.left,
                y: slot.bounds.top,
                width: scale.apply(size.width as u64)?,
                height: scale.apply(size.height as u64)?,
            })
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    Ok(SheetPlan {
        size: layout.sheet.size(),
        scale: scale.factor(),
        placements,
    })
}

/// Build the plan for a spritesheet: one command per frame.
pub fn plan_spritesheet(layout: &SpritesheetLayout, scale: Scale) -> SheetPlan {
    let placements = layout
        .clips
        .iter()
        .flat_map(|clip| {
            clip.frames
                .iter()
                .enumerate()
                .map(move |(index, bounds)| PlacementCommand {
                    source: clip.name.clone(),
                    frame_index: Some(index as u32),
                    x: bounds.left,
                    y: bounds.top,
                    width: bounds.width,
                    height: bounds.height,
                })
        })
        .collect();

    SheetPlan {
        size: layout.sheet.size(),
        scale: scale.factor(),
        placements,
    }
}
