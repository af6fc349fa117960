//! Checker configuration
//!
//! Every knob has a default matching the house layout of a sample folder, so
//! a config file is only needed to deviate from it.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CheckError, Result};

/// Configuration shared by both checkers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// README file name inside a sample folder
    pub readme_file: String,

    /// Stored metadata file name inside a sample folder
    pub metadata_file: String,

    /// Subdirectory holding the sample's source files
    pub source_dir: String,

    /// File extensions counted as snippets
    pub snippet_extensions: Vec<String>,

    /// File extensions counted as screenshots
    pub image_extensions: Vec<String>,

    /// Allowed category names
    pub categories: Vec<String>,

    /// Section heading vocabulary
    pub headings: HeadingRules,
}

/// Level-2 heading vocabulary, in required order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingRules {
    /// Every heading a README may use, in the order they must appear
    pub allowed: Vec<String>,

    /// Headings that must be present
    pub required: Vec<String>,
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            allowed: to_strings(&[
                "Use case",
                "How to use the sample",
                "How it works",
                "Relevant API",
                "Offline data",
                "About the data",
                "Additional information",
                "Tags",
            ]),
            required: to_strings(&[
                "Use case",
                "How to use the sample",
                "How it works",
                "Relevant API",
                "Tags",
            ]),
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            readme_file: "README.md".to_string(),
            metadata_file: "README.metadata.json".to_string(),
            source_dir: "src".to_string(),
            snippet_extensions: to_strings(&[
                "dart", "py", "rs", "swift", "kt", "java", "js", "ts", "cs",
            ]),
            image_extensions: to_strings(&["png", "jpg", "jpeg", "gif"]),
            categories: to_strings(&[
                "Analysis",
                "Augmented reality",
                "Cloud and portal",
                "Display information",
                "Edit and manage data",
                "Geometry",
                "Layers",
                "Location",
                "Maps",
                "Routing and logistics",
                "Scenes",
                "Search and query",
                "Utility network",
                "Visualization",
            ]),
            headings: HeadingRules::default(),
        }
    }
}

impl CheckerConfig {
    /// Load a configuration from a TOML file, filling gaps with defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|err| CheckError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|err| CheckError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make every check meaningless
    pub fn validate(&self) -> Result<()> {
        if self.snippet_extensions.is_empty() {
            return Err(CheckError::Config("snippet_extensions must not be empty".to_string()));
        }
        if self.categories.is_empty() {
            return Err(CheckError::Config("categories must not be empty".to_string()));
        }
        if let Some(missing) =
            self.headings.required.iter().find(|h| !self.headings.allowed.contains(h))
        {
            return Err(CheckError::Config(format!(
                "required heading '{missing}' is not in the allowed list"
            )));
        }
        Ok(())
    }

    pub fn is_snippet_extension(&self, extension: &str) -> bool {
        has_extension(&self.snippet_extensions, extension)
    }

    pub fn is_image_extension(&self, extension: &str) -> bool {
        has_extension(&self.image_extensions, extension)
    }
}

fn has_extension(list: &[String], extension: &str) -> bool {
    list.iter().any(|ext| ext.eq_ignore_ascii_case(extension))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
