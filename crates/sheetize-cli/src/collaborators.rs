//! File-backed collaborators for the export pipeline.
//!
//! Pixel compositing happens outside this tool: [`PlanFileCompositor`] hands
//! the placement plan over as a JSON file next to the requested output.
//! [`SidecarManifestWriter`] persists the manifest. Both write through
//! [`write_atomic`], so a reader never sees a partially written file.

use sheetize_layout::{CanvasCompositor, CollaboratorError, ManifestSink, SheetPlan};
use sheetize_spec::Manifest;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `contents` to `path` through a temporary file in the same directory.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Path of the placement plan written for a sheet at `output`.
pub fn plan_path(output: &Path) -> PathBuf {
    output.with_extension("plan.json")
}

/// Writes the placement plan as pretty JSON.
#[derive(Debug)]
pub struct PlanFileCompositor {
    path: PathBuf,
}

impl PlanFileCompositor {
    /// Creates a compositor for a sheet at `output`.
    pub fn new(output: &Path) -> Self {
        Self {
            path: plan_path(output),
        }
    }

    /// Plan file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CanvasCompositor for PlanFileCompositor {
    fn compose(&mut self, plan: &SheetPlan) -> Result<(), CollaboratorError> {
        let json = serde_json::to_string_pretty(plan)?;
        write_atomic(&self.path, json.as_bytes())?;
        log::info!(
            "wrote {} placements to {}",
            plan.placements.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Serializes manifests to pretty JSON sidecar files.
#[derive(Debug, Default)]
pub struct SidecarManifestWriter;

impl SidecarManifestWriter {
    /// Creates a writer.
    pub fn new() -> Self {
        Self
    }
}

impl ManifestSink for SidecarManifestWriter {
    fn write(&mut self, path: &Path, manifest: &Manifest) -> Result<(), CollaboratorError> {
        let json = manifest.to_json_pretty()?;
        write_atomic(path, json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetize_spec::{Bounds, Size, Spacing, TilesetManifest};

    fn sample_manifest() -> Manifest {
        Manifest::Tileset(TilesetManifest {
            offset: 0,
            spacing: Spacing::default(),
            frame: Size::new(8, 8),
            nframes: 1,
            tiles_per_row: 1,
            bounds: Bounds::new(0, 0, 8, 8),
        })
    }

    #[test]
    fn test_plan_path() {
        assert_eq!(
            plan_path(Path::new("out/hero.png")),
            PathBuf::from("out/hero.plan.json")
        );
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/dir/file.txt");
        write_atomic(&path, b"hello").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");

        // Overwrites in place and leaves no temp files behind.
        write_atomic(&path, b"bye").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bye");
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_sidecar_writer_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tiles.clip");
        let mut writer = SidecarManifestWriter::new();
        writer.write(&path, &sample_manifest()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(Manifest::from_json(&text).unwrap(), sample_manifest());
    }

    #[test]
    fn test_plan_compositor_writes_json() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("sheet.png");
        let mut compositor = PlanFileCompositor::new(&output);
        let plan = SheetPlan {
            size: Size::new(16, 16),
            scale: 1.0,
            placements: vec![],
        };
        compositor.compose(&plan).unwrap();

        let text = std::fs::read_to_string(compositor.path()).unwrap();
        let parsed: SheetPlan = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, plan);
    }
}
