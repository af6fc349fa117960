// Handlers for the sample-lint subcommands

pub mod metadata;
pub mod readme;

use anyhow::{Context, Result};
use sample_lint_core::CheckerConfig;
use std::path::Path;
use tracing::debug;

/// Load the checker configuration, falling back to defaults
pub fn load_config(path: Option<&Path>) -> Result<CheckerConfig> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            CheckerConfig::from_toml_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))
        }
        None => Ok(CheckerConfig::default()),
    }
}
