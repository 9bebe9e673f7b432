//! Slicing an existing sheet back into tile cells.

use serde::Serialize;
use sheetize_spec::validation::validate_frame;
use sheetize_spec::{Bounds, LayoutError, LayoutOptions, Size};

/// A cell cut out of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlicedTile {
    /// Generated name, `tile_{index}` in row-major order.
    pub name: String,
    /// Cell bounds on the sheet.
    pub bounds: Bounds,
}

/// Enumerate the full `frame`-sized cells of a `sheet`-sized image.
///
/// Scanning starts at `options.offset` on both axes and steps by the frame
/// size plus spacing. The border is symmetric, so cells must also end at
/// least `offset` pixels before the right and bottom edges; partial cells are
/// skipped. `scale` and `invert_order` are ignored: the sheet is read as-is.
pub fn slice_sheet(
    sheet: Size,
    frame: Size,
    options: &LayoutOptions,
) -> Result<Vec<SlicedTile>, LayoutError> {
    validate_frame(frame)?;

    let offset = options.offset as u64;
    let step_x = frame.width as u64 + options.spacing.horizontal as u64;
    let step_y = frame.height as u64 + options.spacing.vertical as u64;

    let limit_x = (sheet.width as u64).saturating_sub(offset);
    let limit_y = (sheet.height as u64).saturating_sub(offset);

    let mut tiles = Vec::new();
    let mut y = offset;
    while y + frame.height as u64 <= limit_y {
        let mut x = offset;
        while x + frame.width as u64 <= limit_x {
            tiles.push(SlicedTile {
                name: format!("tile_{}", tiles.len()),
                bounds: Bounds::new(x as u32, y as u32, frame.width, frame.height),
            });
            x += step_x;
        }
        y += step_y;
    }

    if tiles.is_empty() {
        log::warn!(
            "no {}x{} cell fits a {}x{} sheet at offset {}",
            frame.width,
            frame.height,
            sheet.width,
            sheet.height,
            options.offset
        );
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tileset;
    use sheetize_spec::Spacing;

    #[test]
    fn test_slice_plain_grid() {
        let tiles = slice_sheet(Size::new(64, 32), Size::new(16, 16), &LayoutOptions::default())
            .unwrap();
        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[0].name, "tile_0");
        assert_eq!(tiles[5].bounds, Bounds::new(16, 16, 16, 16));
    }

    #[test]
    fn test_slice_skips_partial_cells() {
        let tiles = slice_sheet(Size::new(40, 20), Size::new(16, 16), &LayoutOptions::default())
            .unwrap();
        assert_eq!(tiles.len(), 2);
    }

    #[test]
    fn test_slice_inverts_tileset() {
        let options = LayoutOptions::default()
            .with_offset(3)
            .with_spacing(Spacing::new(2, 1));
        let frame = Size::new(12, 10);
        let layout = resolve_tileset(5, frame, &options).unwrap();
        let sliced = slice_sheet(layout.sheet.size(), frame, &options).unwrap();

        assert_eq!(sliced.len() as u64, layout.grid.cells());
        for (slot, cell) in layout.tiles.iter().zip(&sliced) {
            assert_eq!(slot.bounds, cell.bounds);
        }
    }

    #[test]
    fn test_slice_respects_far_border() {
        // A 20px border would leave room for another 16px cell on the right
        // if only the left border were honoured.
        let options = LayoutOptions::default().with_offset(20);
        let tiles = slice_sheet(Size::new(72, 56), Size::new(16, 16), &options).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].bounds, Bounds::new(36, 20, 16, 16));
    }

    #[test]
    fn test_slice_too_small_sheet() {
        let tiles = slice_sheet(Size::new(8, 8), Size::new(16, 16), &LayoutOptions::default())
            .unwrap();
        assert!(tiles.is_empty());
    }
}
