//! Error types for sample checks
//!
//! One variant per failure kind a check can report, plus the plumbing
//! variants for reading files and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Error parsing README - {0}")]
    ParseError(String),

    #[error("Error path - {0}")]
    PathError(String),

    #[error("Error category - {0}")]
    CategoryError(String),

    #[error("Error inconsistent metadata - {path}\n{diff}")]
    MetadataMismatch { path: String, diff: String },

    #[error("Error header - {0}")]
    HeadingFormatError(String),

    #[error("Error title - {0}")]
    TitleFormatError(String),

    #[error("Error APIs - {0}")]
    ApiFormatError(String),

    #[error("Error tags - {0}")]
    TagFormatError(String),

    #[error("Error redundant - {0}")]
    RedundantTagError(String),

    #[error("Error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckError {
    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::ParseError(_) => "parse",
            CheckError::PathError(_) => "path",
            CheckError::CategoryError(_) => "category",
            CheckError::MetadataMismatch { .. } => "metadata-mismatch",
            CheckError::HeadingFormatError(_) => "heading-format",
            CheckError::TitleFormatError(_) => "title-format",
            CheckError::ApiFormatError(_) => "api-format",
            CheckError::TagFormatError(_) => "tag-format",
            CheckError::RedundantTagError(_) => "redundant-tag",
            CheckError::Io { .. } => "io",
            CheckError::Config(_) => "config",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = CheckError::HeadingFormatError("Wrong order at: Use case.".to_string());
        assert_eq!(err.to_string(), "Error header - Wrong order at: Use case.");
        assert_eq!(err.kind(), "heading-format");

        let err = CheckError::MetadataMismatch {
            path: "samples/maps/display_map".to_string(),
            diff: "-a\n+b".to_string(),
        };
        assert!(err.to_string().starts_with("Error inconsistent metadata - samples/maps/display_map\n"));
    }
}
