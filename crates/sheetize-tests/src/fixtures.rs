//! Request builders for the reference scenarios.

use sheetize_spec::{
    Clip, ExportRequest, LayoutOptions, PackingStrategy, Scale, Size, Spacing,
    SpritesheetRequest, Tile, TilesetRequest,
};

/// `count` frame-sized tiles named `tile_0`, `tile_1`, ...
pub fn tiles(count: usize) -> Vec<Tile> {
    (0..count).map(|i| Tile::new(format!("tile_{}", i))).collect()
}

/// Clips named `clip_0`, `clip_1`, ... with the given lengths.
pub fn clips(lengths: &[u32]) -> Vec<Clip> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &n)| Clip::new(format!("clip_{}", i), n))
        .collect()
}

/// Seven 32x32 tiles with default options.
pub fn seven_tiles() -> ExportRequest {
    ExportRequest::Tileset(TilesetRequest {
        frame: Size::new(32, 32),
        tiles: tiles(7),
        options: LayoutOptions::default(),
    })
}

/// A single four-frame `walk` clip, 16x16 frames, offset 2, spacing 1,
/// scale 2.
pub fn walk_clip() -> ExportRequest {
    ExportRequest::Spritesheet(SpritesheetRequest {
        frame: Size::new(16, 16),
        clips: vec![Clip::new("walk", 4)],
        options: LayoutOptions::default()
            .with_offset(2)
            .with_spacing(Spacing::uniform(1))
            .with_scale(Scale::new(2.0).expect("2 is a valid scale")),
        packing: PackingStrategy::BestFitDecreasing,
    })
}

/// Clips of lengths 4, 3, 3, 2, 1 on 8x8 frames.
pub fn five_clips() -> ExportRequest {
    ExportRequest::Spritesheet(SpritesheetRequest {
        frame: Size::new(8, 8),
        clips: clips(&[4, 3, 3, 2, 1]),
        options: LayoutOptions::default(),
        packing: PackingStrategy::BestFitDecreasing,
    })
}
