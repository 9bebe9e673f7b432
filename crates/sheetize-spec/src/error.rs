//! Error types for layout input validation and computation.

use thiserror::Error;

/// Errors raised by the layout core.
///
/// All of them are detected before any placement or manifest data is
/// produced, so a failed export never yields partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// No tiles or clips were supplied.
    #[error("no tiles or clips were supplied; a sheet needs at least one item")]
    EmptyInput,

    /// A tile, clip, or frame has a zero or out-of-range dimension.
    #[error("{subject} has an invalid dimension: {detail}")]
    InvalidDimension {
        /// What was being validated (e.g. `clip 'walk'`, `frame`).
        subject: String,
        /// Human-readable description of the problem.
        detail: String,
    },

    /// Two clips share the same name.
    #[error("duplicate clip name: '{0}'")]
    DuplicateName(String),

    /// A layout option is outside its domain, or the layout overflows the
    /// pixel coordinate range.
    #[error("invalid layout option: {0}")]
    InvalidOption(String),
}

impl LayoutError {
    /// Creates an [`LayoutError::InvalidDimension`] error.
    pub fn invalid_dimension(subject: impl Into<String>, detail: impl Into<String>) -> Self {
        LayoutError::InvalidDimension {
            subject: subject.into(),
            detail: detail.into(),
        }
    }

    /// Returns the stable error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::EmptyInput => "E001",
            LayoutError::InvalidDimension { .. } => "E002",
            LayoutError::DuplicateName(_) => "E003",
            LayoutError::InvalidOption(_) => "E004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            LayoutError::EmptyInput,
            LayoutError::invalid_dimension("frame", "width must be at least 1"),
            LayoutError::DuplicateName("walk".to_string()),
            LayoutError::InvalidOption("scale".to_string()),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_invalid_dimension_display() {
        let err = LayoutError::invalid_dimension("clip 'walk'", "frame_count must be at least 1");
        assert_eq!(
            err.to_string(),
            "clip 'walk' has an invalid dimension: frame_count must be at least 1"
        );
    }
}
