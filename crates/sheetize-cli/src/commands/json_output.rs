//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; output then goes to stdout as one
//! [`CommandOutput`] document with no colour codes.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sheetize_layout::ExportError;
use std::process::ExitCode;

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Layout errors pass their own codes (`E001`...) through unchanged.
pub mod error_codes {
    /// Invalid command-line argument
    pub const INVALID_ARGUMENT: &str = "CLI_010";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_011";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches the source file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

impl From<&ExportError> for JsonError {
    fn from(err: &ExportError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

impl From<&sheetize_spec::LayoutError> for JsonError {
    fn from(err: &sheetize_spec::LayoutError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// Top-level JSON document printed by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Errors (empty on success).
    pub errors: Vec<JsonError>,
    /// Command result (on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Prints the document and returns the matching exit code.
    ///
    /// A result that fails to serialize is reported as a `CLI_011` failure
    /// document instead.
    pub fn emit(&self) -> Result<ExitCode> {
        let (document, success) = self.render()?;
        println!("{}", document);
        Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        })
    }

    /// Pretty JSON text of the document, and whether it reports success.
    fn render(&self) -> Result<(String, bool)> {
        match serde_json::to_string_pretty(self) {
            Ok(document) => Ok((document, self.success)),
            Err(e) => {
                let fallback = CommandOutput::<()>::failure(vec![JsonError::new(
                    error_codes::JSON_SERIALIZE,
                    format!("failed to serialize command output: {}", e),
                )]);
                Ok((serde_json::to_string_pretty(&fallback)?, false))
            }
        }
    }
}

/// Prints a single-error failure document.
pub fn emit_error(error: JsonError) -> Result<ExitCode> {
    CommandOutput::<()>::failure(vec![error]).emit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetize_spec::LayoutError;

    #[test]
    fn test_failure_serialization_omits_result() {
        let output = CommandOutput::<u32>::failure(vec![JsonError::from(&LayoutError::EmptyInput)]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "E001");
        assert!(json.get("result").is_none());
        assert!(json["errors"][0].get("file").is_none());
    }

    #[test]
    fn test_success_serialization() {
        let output = CommandOutput::success(vec![1, 2]);
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"success":true,"errors":[],"result":[1,2]}"#);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("sheet handle is not data"))
        }
    }

    #[test]
    fn test_unserializable_result_becomes_failure() {
        let (document, success) = CommandOutput::success(Unserializable).render().unwrap();
        assert!(!success);
        let json: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], error_codes::JSON_SERIALIZE);
        assert!(json["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("sheet handle is not data"));
    }

    #[test]
    fn test_input_error_code_passthrough() {
        let err = InputError::UnknownExtension {
            extension: Some("txt".to_string()),
        };
        let json = JsonError::from(&err).with_file("a.txt");
        assert_eq!(json.code, "CLI_002");
        assert_eq!(json.file.as_deref(), Some("a.txt"));
    }
}
