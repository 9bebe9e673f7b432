//! Manifest construction from resolved layouts.
//!
//! The builder only copies values out of the resolved layout; nothing is
//! rescaled or rounded here.

use sheetize_spec::{
    AnimationState, Manifest, SpritesheetDefaults, SpritesheetManifest, TilesetManifest,
};

use crate::resolve::{ResolvedLayout, SpritesheetLayout, TilesetLayout};

/// Build the tileset manifest record.
pub fn build_tileset_manifest(layout: &TilesetLayout) -> TilesetManifest {
    TilesetManifest {
        offset: layout.metrics.offset,
        spacing: layout.metrics.spacing,
        frame: layout.metrics.frame,
        nframes: layout.tile_count,
        tiles_per_row: layout.grid.cols,
        bounds: layout.content,
    }
}

/// Build the spritesheet manifest record.
///
/// States are emitted in row-major, then column order.
pub fn build_spritesheet_manifest(layout: &SpritesheetLayout) -> SpritesheetManifest {
    SpritesheetManifest {
        defaults: SpritesheetDefaults {
            frame: layout.metrics.frame,
            spacing: layout.metrics.spacing,
        },
        states: layout
            .clips
            .iter()
            .map(|clip| AnimationState {
                name: clip.name.clone(),
                bounds: clip.bounds,
                nframes: clip.length,
            })
            .collect(),
    }
}

/// Build the manifest for a resolved layout of either mode.
pub fn build_manifest(layout: &ResolvedLayout) -> Manifest {
    match layout {
        ResolvedLayout::Tileset(l) => Manifest::Tileset(build_tileset_manifest(l)),
        ResolvedLayout::Spritesheet(l) => Manifest::Spritesheet(build_spritesheet_manifest(l)),
    }
}
