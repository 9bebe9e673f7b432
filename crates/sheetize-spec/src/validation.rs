//! Input validation for tiles, clips, and frame cells.
//!
//! Validation runs before any grid, packing, or coordinate work so that a
//! rejected request produces no partial output.

use std::collections::HashSet;

use crate::error::LayoutError;
use crate::geometry::Size;
use crate::request::ExportRequest;
use crate::source::{Clip, Tile};

/// Validate that a frame cell has a non-zero area.
///
/// # Example
/// ```
/// use sheetize_spec::{validation::validate_frame, Size};
///
/// assert!(validate_frame(Size::new(16, 16)).is_ok());
/// assert!(validate_frame(Size::new(0, 16)).is_err());
/// ```
pub fn validate_frame(frame: Size) -> Result<(), LayoutError> {
    if frame.width == 0 || frame.height == 0 {
        return Err(LayoutError::invalid_dimension(
            "frame",
            format!(
                "frame must be at least 1x1, got {}x{}",
                frame.width, frame.height
            ),
        ));
    }
    Ok(())
}

/// Validate a tile list against the sheet's frame cell.
///
/// Every tile must have a positive size no larger than the frame cell.
pub fn validate_tiles(frame: Size, tiles: &[Tile]) -> Result<(), LayoutError> {
    if tiles.is_empty() {
        return Err(LayoutError::EmptyInput);
    }
    validate_frame(frame)?;

    for tile in tiles {
        let size = tile.size_in(frame);
        if size.width == 0 || size.height == 0 {
            return Err(LayoutError::invalid_dimension(
                format!("tile '{}'", tile.name),
                format!("size must be at least 1x1, got {}x{}", size.width, size.height),
            ));
        }
        if size.width > frame.width || size.height > frame.height {
            return Err(LayoutError::invalid_dimension(
                format!("tile '{}'", tile.name),
                format!(
                    "size {}x{} exceeds the {}x{} frame cell",
                    size.width, size.height, frame.width, frame.height
                ),
            ));
        }
    }
    Ok(())
}

/// Validate a clip list: non-empty, every clip has frames, names are unique.
pub fn validate_clips(clips: &[Clip]) -> Result<(), LayoutError> {
    if clips.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let mut seen = HashSet::new();
    for clip in clips {
        if clip.frame_count == 0 {
            return Err(LayoutError::invalid_dimension(
                format!("clip '{}'", clip.name),
                "frame_count must be at least 1",
            ));
        }
        if !seen.insert(clip.name.as_str()) {
            return Err(LayoutError::DuplicateName(clip.name.clone()));
        }
    }
    Ok(())
}

/// Validate a full export request.
pub fn validate_request(request: &ExportRequest) -> Result<(), LayoutError> {
    match request {
        ExportRequest::Tileset(r) => validate_tiles(r.frame, &r.tiles),
        ExportRequest::Spritesheet(r) => {
            validate_clips(&r.clips)?;
            validate_frame(r.frame)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;
    use crate::request::TilesetRequest;

    #[test]
    fn test_empty_inputs_rejected() {
        assert_eq!(
            validate_tiles(Size::new(16, 16), &[]),
            Err(LayoutError::EmptyInput)
        );
        assert_eq!(validate_clips(&[]), Err(LayoutError::EmptyInput));
    }

    #[test]
    fn test_empty_input_checked_before_frame() {
        // Empty input wins over a bad frame: nothing to lay out at all.
        assert_eq!(
            validate_tiles(Size::new(0, 0), &[]),
            Err(LayoutError::EmptyInput)
        );
    }

    #[test]
    fn test_zero_frame_count_rejected() {
        let clips = vec![Clip::new("idle", 2), Clip::new("walk", 0)];
        let err = validate_clips(&clips).unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(err.to_string().contains("walk"));
    }

    #[test]
    fn test_duplicate_clip_names_rejected() {
        let clips = vec![Clip::new("idle", 2), Clip::new("idle", 3)];
        assert_eq!(
            validate_clips(&clips),
            Err(LayoutError::DuplicateName("idle".to_string()))
        );
    }

    #[test]
    fn test_tile_larger_than_frame_rejected() {
        let frame = Size::new(16, 16);
        assert!(validate_tiles(frame, &[Tile::sized("a", 16, 16)]).is_ok());
        assert!(validate_tiles(frame, &[Tile::sized("b", 8, 4)]).is_ok());
        assert!(validate_tiles(frame, &[Tile::sized("c", 17, 16)]).is_err());
        assert!(validate_tiles(frame, &[Tile::sized("d", 0, 16)]).is_err());
    }

    #[test]
    fn test_validate_request_zero_frame() {
        let request = ExportRequest::Tileset(TilesetRequest {
            frame: Size::new(16, 0),
            tiles: vec![Tile::new("a")],
            options: LayoutOptions::default(),
        });
        assert!(matches!(
            validate_request(&request),
            Err(LayoutError::InvalidDimension { .. })
        ));
    }
}
