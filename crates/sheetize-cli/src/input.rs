//! Loading export requests from JSON or YAML files.
//!
//! Requests are dispatched by file extension and returned together with the
//! source format and a BLAKE3 hash of the raw file content.

use serde::{Deserialize, Serialize};
use sheetize_spec::ExportRequest;
use std::path::{Path, PathBuf};

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized YAML extensions.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Identifies the source format of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON request file.
    Json,
    /// YAML request file.
    Yaml,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of loading a request.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed request.
    pub request: ExportRequest,
    /// Source format.
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading a request.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// YAML parsing failed.
    YamlParse { message: String },
}

impl InputError {
    /// Returns the stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => "CLI_001",
            InputError::UnknownExtension { .. } => "CLI_002",
            InputError::JsonParse { .. } => "CLI_003",
            InputError::YamlParse { .. } => "CLI_004",
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(
                    f,
                    "unknown file extension '.{}' (expected .json, .yaml or .yml)",
                    ext
                ),
                None => write!(f, "file has no extension (expected .json, .yaml or .yml)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
            InputError::YamlParse { message } => {
                write!(f, "YAML parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a request from a file path, dispatching by extension.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use sheetize_cli::input::load_request;
///
/// let result = load_request(Path::new("hero.json")).unwrap();
/// println!("Loaded {} request", result.request.mode());
/// ```
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    let source_kind = match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => SourceKind::Json,
        Some(ext) if YAML_EXTENSIONS.contains(&ext) => SourceKind::Yaml,
        _ => return Err(InputError::UnknownExtension { extension }),
    };

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let request = parse_request(&content, source_kind)?;
    log::debug!(
        "loaded {} request from {} ({})",
        request.mode(),
        path.display(),
        &source_hash[..16]
    );

    Ok(LoadResult {
        request,
        source_kind,
        source_hash,
    })
}

/// Parse request text in the given format.
pub fn parse_request(content: &str, kind: SourceKind) -> Result<ExportRequest, InputError> {
    match kind {
        SourceKind::Json => ExportRequest::from_json(content).map_err(|e| InputError::JsonParse {
            message: e.to_string(),
        }),
        SourceKind::Yaml => serde_yaml::from_str(content).map_err(|e| InputError::YamlParse {
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetize_spec::SheetMode;

    #[test]
    fn test_source_kind_display() {
        assert_eq!(format!("{}", SourceKind::Json), "json");
        assert_eq!(format!("{}", SourceKind::Yaml), "yaml");
    }

    #[test]
    fn test_load_json_request() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hero.json");
        std::fs::write(
            &path,
            r#"{
                "mode": "spritesheet",
                "frame": { "width": 16, "height": 16 },
                "clips": [ { "name": "walk", "frame_count": 4 } ]
            }"#,
        )
        .unwrap();

        let result = load_request(&path).unwrap();
        assert_eq!(result.source_kind, SourceKind::Json);
        assert_eq!(result.request.mode(), SheetMode::Spritesheet);
        assert_eq!(result.source_hash.len(), 64);
    }

    #[test]
    fn test_load_yaml_request() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tiles.YML");
        std::fs::write(
            &path,
            "mode: tileset\nframe: { width: 32, height: 32 }\ntiles:\n  - name: grass\n  - name: dirt\noptions:\n  offset: 2\n",
        )
        .unwrap();

        let result = load_request(&path).unwrap();
        assert_eq!(result.source_kind, SourceKind::Yaml);
        assert_eq!(result.request.mode(), SheetMode::Tileset);
        assert_eq!(result.request.options().offset, 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_request(
            r#"{ "mode": "tileset", "frame": { "width": 1, "height": 1 }, "tiles": [], "colour": 3 }"#,
            SourceKind::Json,
        )
        .unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert_eq!(err.code(), "CLI_003");
    }

    #[test]
    fn test_load_unknown_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("request.toml");
        std::fs::write(&path, "mode = 'tileset'").unwrap();

        let result = load_request(&path);
        assert!(matches!(
            result,
            Err(InputError::UnknownExtension { extension: Some(ref ext) }) if ext == "toml"
        ));
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_request(Path::new("/nonexistent/request.json"));
        assert!(matches!(result, Err(InputError::FileRead { .. })));
    }
}
