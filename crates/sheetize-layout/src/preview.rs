//! Tile preview geometry: how a tile repeats next to its neighbours.
//!
//! Each [`PreviewMode`] arranges a primary tile and an optional secondary
//! tile on a small canvas. Only positions are computed here; drawing the
//! preview belongs to the host.

use serde::Serialize;
use sheetize_spec::validation::validate_frame;
use sheetize_spec::{LayoutError, PreviewMode, Scale, Size};

/// Which of the two preview tiles fills a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewSource {
    /// The tile being edited.
    Primary,
    /// The neighbouring tile.
    Secondary,
}

/// One preview cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewCell {
    /// Tile drawn in this cell.
    pub source: PreviewSource,
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
}

/// Preview canvas and its cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLayout {
    /// Preview mode.
    pub mode: PreviewMode,
    /// Canvas size after zoom.
    pub canvas: Size,
    /// Cell size after zoom.
    pub cell: Size,
    /// Cells in drawing order.
    pub cells: Vec<PreviewCell>,
}

/// Lay out a preview of `tile`-sized cells.
///
/// `has_secondary` says whether a secondary tile was chosen; when it was not,
/// cells that would show it fall back to the primary tile (or are dropped,
/// for [`PreviewMode::VerticalAdjacent`] and the outer columns of
/// [`PreviewMode::Columns`]).
pub fn preview_layout(
    mode: PreviewMode,
    tile: Size,
    has_secondary: bool,
    zoom: Scale,
) -> Result<PreviewLayout, LayoutError> {
    validate_frame(tile)?;

    let neighbour = if has_secondary {
        PreviewSource::Secondary
    } else {
        PreviewSource::Primary
    };

    // (column, row, source) in cell units, plus the canvas size in cells.
    let (grid_cols, grid_rows, cells): (u32, u32, Vec<(u32, u32, PreviewSource)>) = match mode {
        PreviewMode::Block => {
            let cells = (0..3)
                .flat_map(|row| (0..3).map(move |col| (col, row)))
                .map(|(col, row)| {
                    let source = if col == 1 && row == 1 {
                        PreviewSource::Primary
                    } else {
                        neighbour
                    };
                    (col, row, source)
                })
                .collect();
            (3, 3, cells)
        }
        PreviewMode::Floor => {
            let cells = (0..3)
                .map(|col| {
                    let source = if col == 1 {
                        PreviewSource::Primary
                    } else {
                        neighbour
                    };
                    (col, 0, source)
                })
                .collect();
            (3, 1, cells)
        }
        PreviewMode::Columns if has_secondary => {
            let cells = (0..3)
                .flat_map(|row| (0..3).map(move |col| (col, row)))
                .map(|(col, row)| {
                    let source = if col == 1 {
                        PreviewSource::Primary
                    } else {
                        PreviewSource::Secondary
                    };
                    (col, row, source)
                })
                .collect();
            (3, 3, cells)
        }
        PreviewMode::Columns => {
            let cells = (0..3).map(|row| (0, row, PreviewSource::Primary)).collect();
            (1, 3, cells)
        }
        PreviewMode::VerticalAdjacent => {
            let mut cells = vec![(0, 0, PreviewSource::Primary)];
            if has_secondary {
                cells.push((0, 1, PreviewSource::Secondary));
            }
            (1, 2, cells)
        }
    };

    let cells = cells
        .into_iter()
        .map(|(col, row, source)| {
            Ok(PreviewCell {
                source,
                x: zoom.apply(col as u64 * tile.width as u64)?,
                y: zoom.apply(row as u64 * tile.height as u64)?,
            })
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    Ok(PreviewLayout {
        mode,
        canvas: Size::new(
            zoom.apply(grid_cols as u64 * tile.width as u64)?,
            zoom.apply(grid_rows as u64 * tile.height as u64)?,
        ),
        cell: Size::new(
            zoom.apply(tile.width as u64)?,
            zoom.apply(tile.height as u64)?,
        ),
        cells,
    })
}
