//! Coordinate resolution: exact pixel boxes for every tile, clip, and frame.
//!
//! All arithmetic happens in pre-scale pixels (as `u64`). The upscale factor
//! is applied last, field by field, with truncation. Manifests and placement
//! plans copy these values rather than recomputing them.

use serde::Serialize;
use sheetize_spec::validation::validate_frame;
use sheetize_spec::{Bounds, LayoutError, LayoutOptions, Size, Spacing};

use crate::grid::{grid_dimensions, Grid};
use crate::pack::PackedLayout;

/// Offset, spacing, and frame size after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaledMetrics {
    /// Scaled border.
    pub offset: u32,
    /// Scaled gaps.
    pub spacing: Spacing,
    /// Scaled frame cell.
    pub frame: Size,
}

impl ScaledMetrics {
    fn new(frame: Size, options: &LayoutOptions) -> Result<Self, LayoutError> {
        let scale = options.scale;
        Ok(Self {
            offset: scale.apply(options.offset as u64)?,
            spacing: Spacing::new(
                scale.apply(options.spacing.horizontal as u64)?,
                scale.apply(options.spacing.vertical as u64)?,
            ),
            frame: Size::new(
                scale.apply(frame.width as u64)?,
                scale.apply(frame.height as u64)?,
            ),
        })
    }
}

/// Grid cell occupied by one tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSlot {
    /// Index of the tile in the caller's input list.
    pub source_index: usize,
    /// Grid column.
    pub column: u32,
    /// Grid row.
    pub row: u32,
    /// Scaled cell bounds.
    pub bounds: Bounds,
}

/// Resolved tileset layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TilesetLayout {
    /// Grid shape.
    pub grid: Grid,
    /// Number of tiles placed.
    pub tile_count: u32,
    /// Scaled offset, spacing, and frame.
    pub metrics: ScaledMetrics,
    /// Whole sheet, including the border.
    pub sheet: Bounds,
    /// Region covered by the grid, excluding the border.
    pub content: Bounds,
    /// Tiles in placement (row-major) order.
    pub tiles: Vec<TileSlot>,
}

/// Placement of one clip on a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipSlot {
    /// Index of the clip in the caller's input list.
    pub source_index: usize,
    /// Clip name.
    pub name: String,
    /// Number of frames.
    pub length: u32,
    /// Packed row.
    pub row: u32,
    /// First frame column occupied by the clip.
    pub column: u32,
    /// Scaled span covering every frame of the clip.
    pub bounds: Bounds,
    /// Scaled bounds of each frame, indexed by the frame's position in the
    /// clip.
    pub frames: Vec<Bounds>,
}

/// Resolved spritesheet layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpritesheetLayout {
    /// Frame columns (the packing capacity).
    pub columns: u32,
    /// Packed rows.
    pub rows: u32,
    /// Scaled offset, spacing, and frame.
    pub metrics: ScaledMetrics,
    /// Whole sheet, including the border.
    pub sheet: Bounds,
    /// Region covered by frames, excluding the border.
    pub content: Bounds,
    /// Clips in row-major, then column order.
    pub clips: Vec<ClipSlot>,
}

/// A resolved layout of either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResolvedLayout {
    /// Tileset layout.
    Tileset(TilesetLayout),
    /// Spritesheet layout.
    Spritesheet(SpritesheetLayout),
}

impl ResolvedLayout {
    /// Returns the whole-sheet bounds.
    pub fn sheet(&self) -> Bounds {
        match self {
            ResolvedLayout::Tileset(l) => l.sheet,
            ResolvedLayout::Spritesheet(l) => l.sheet,
        }
    }
}

fn out_of_range() -> LayoutError {
    LayoutError::InvalidOption("layout exceeds the pixel range".to_string())
}

/// Pre-scale extent of `count` cells of `cell` pixels separated by `gap`.
fn span(count: u64, cell: u64, gap: u64) -> Result<u64, LayoutError> {
    if count == 0 {
        return Ok(0);
    }
    count
        .checked_mul(cell)
        .zip((count - 1).checked_mul(gap))
        .and_then(|(cells, gaps)| cells.checked_add(gaps))
        .ok_or_else(out_of_range)
}

/// `extent + 2 * offset`, the size including the border on both sides.
fn with_border(extent: u64, offset: u64) -> Result<u64, LayoutError> {
    offset
        .checked_mul(2)
        .and_then(|border| extent.checked_add(border))
        .ok_or_else(out_of_range)
}

/// Pre-scale sheet and content boxes for a `cols` x `rows` cell grid.
fn sheet_bounds(
    cols: u64,
    rows: u64,
    frame: Size,
    options: &LayoutOptions,
) -> Result<(Bounds, Bounds), LayoutError> {
    let offset = options.offset as u64;
    let content_w = span(cols, frame.width as u64, options.spacing.horizontal as u64)?;
    let content_h = span(rows, frame.height as u64, options.spacing.vertical as u64)?;

    let scale = options.scale;
    let sheet = scale.apply_bounds(
        0,
        0,
        with_border(content_w, offset)?,
        with_border(content_h, offset)?,
    )?;
    let content = scale.apply_bounds(offset, offset, content_w, content_h)?;
    Ok((sheet, content))
}

/// Pre-scale top-left corner of cell (`col`, `row`).
fn cell_origin(
    col: u64,
    row: u64,
    frame: Size,
    options: &LayoutOptions,
) -> Result<(u64, u64), LayoutError> {
    let offset = options.offset as u64;
    let pitch_x = frame.width as u64 + options.spacing.horizontal as u64;
    let pitch_y = frame.height as u64 + options.spacing.vertical as u64;
    let left = col.checked_mul(pitch_x).and_then(|x| x.checked_add(offset));
    let top = row.checked_mul(pitch_y).and_then(|y| y.checked_add(offset));
    left.zip(top).ok_or_else(out_of_range)
}

/// Resolve the tileset layout for `tile_count` tiles of `frame` size.
///
/// Tiles fill the grid row-major. With `invert_order`, the input order is
/// reversed first: the last input tile takes cell (0, 0).
pub fn resolve_tileset(
    tile_count: usize,
    frame: Size,
    options: &LayoutOptions,
) -> Result<TilesetLayout, LayoutError> {
    let grid = grid_dimensions(tile_count)?;
    validate_frame(frame)?;

    let order: Vec<usize> = if options.invert_order {
        (0..tile_count).rev().collect()
    } else {
        (0..tile_count).collect()
    };

    let scale = options.scale;
    let mut tiles = Vec::with_capacity(tile_count);
    for (slot, source_index) in order.into_iter().enumerate() {
        let (column, row) = grid.cell(slot as u32);
        let (left, top) = cell_origin(column as u64, row as u64, frame, options)?;
        let bounds = scale.apply_bounds(left, top, frame.width as u64, frame.height as u64)?;
        tiles.push(TileSlot {
            source_index,
            column,
            row,
            bounds,
        });
    }

    let (sheet, content) = sheet_bounds(grid.cols as u64, grid.rows as u64, frame, options)?;

    Ok(TilesetLayout {
        grid,
        tile_count: tile_count as u32,
        metrics: ScaledMetrics::new(frame, options)?,
        sheet,
        content,
        tiles,
    })
}

/// Resolve the spritesheet layout for packed rows of `frame`-sized cells.
///
/// Within a clip's span, frame `i` of a clip of length `n` sits in column
/// `n - i - 1`: frames run right to left. Source clips list their first
/// frame last, so this keeps the sheet in playback order left to right.
pub fn resolve_spritesheet(
    packed: &PackedLayout,
    frame: Size,
    options: &LayoutOptions,
) -> Result<SpritesheetLayout, LayoutError> {
    if packed.rows.is_empty() {
        return Err(LayoutError::EmptyInput);
    }
    validate_frame(frame)?;

    let scale = options.scale;
    let frame_w = frame.width as u64;
    let frame_h = frame.height as u64;
    let gap_x = options.spacing.horizontal as u64;

    let mut clips = Vec::new();
    for (row_index, row) in packed.rows.iter().enumerate() {
        let mut column = 0u64;
        for clip in &row.clips {
            let length = clip.length as u64;
            let (left, top) = cell_origin(column, row_index as u64, frame, options)?;
            let bounds = scale.apply_bounds(left, top, span(length, frame_w, gap_x)?, frame_h)?;

            let frames = (0..length)
                .map(|i| {
                    let (frame_left, _) =
                        cell_origin(column + length - i - 1, row_index as u64, frame, options)?;
                    scale.apply_bounds(frame_left, top, frame_w, frame_h)
                })
                .collect::<Result<Vec<_>, _>>()?;

            clips.push(ClipSlot {
                source_index: clip.source_index,
                name: clip.name.clone(),
                length: clip.length,
                row: row_index as u32,
                column: column as u32,
                bounds,
                frames,
            });
            column += length;
        }
    }

    let (sheet, content) = sheet_bounds(
        packed.columns() as u64,
        packed.row_count() as u64,
        frame,
        options,
    )?;

    Ok(SpritesheetLayout {
        columns: packed.columns(),
        rows: packed.row_count(),
        metrics: ScaledMetrics::new(frame, options)?,
        sheet,
        content,
        clips,
    })
}
