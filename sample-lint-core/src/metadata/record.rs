//! Metadata record: derive, reconcile with the stored file, then freeze

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::category;
use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};
use crate::metadata::canonical::to_canonical_json;
use crate::metadata::stored::StoredMetadata;
use crate::normalize::sub_special_char;
use crate::paths::SamplePaths;
use crate::readme::{ParsedReadme, ReadmeDocument};

/// Collects the README and path facts for one sample folder
#[derive(Debug)]
pub struct MetadataBuilder<'a> {
    folder: PathBuf,
    config: &'a CheckerConfig,
    readme: Option<ParsedReadme>,
    paths: Option<SamplePaths>,
}

impl<'a> MetadataBuilder<'a> {
    pub fn new(folder: impl Into<PathBuf>, config: &'a CheckerConfig) -> Self {
        Self { folder: folder.into(), config, readme: None, paths: None }
    }

    /// Fill title, description, APIs and keywords from the README
    pub fn populate_from_readme(&mut self) -> Result<()> {
        let doc = ReadmeDocument::load(&self.folder, self.config)?;
        let parsed = ParsedReadme::from_document(&doc, self.config)?;
        debug!(
            "README of {} yields {} API(s) and {} tag(s)",
            self.folder.display(),
            parsed.apis.len(),
            parsed.tags.len()
        );
        self.readme = Some(parsed);
        Ok(())
    }

    /// Fill folder identity, snippets and images from the file layout
    pub fn populate_from_paths(&mut self) -> Result<()> {
        let paths = SamplePaths::derive(&self.folder, self.config)?;
        if let Some(readme) = &self.readme {
            for reference in &readme.snippet_refs {
                let on_disk = paths
                    .snippets
                    .iter()
                    .any(|s| s == reference || s.ends_with(&format!("/{reference}")));
                if !on_disk {
                    return Err(CheckError::PathError(format!(
                        "README references '{reference}' which is not in '{}'",
                        self.config.source_dir
                    )));
                }
            }
        }
        self.paths = Some(paths);
        Ok(())
    }

    /// Combine both halves into a derived record
    pub fn derive(self) -> Result<DerivedMetadata> {
        let readme = self.readme.ok_or_else(|| {
            CheckError::ParseError("README fields were not populated".to_string())
        })?;
        let paths = self.paths.ok_or_else(|| {
            CheckError::PathError("path fields were not populated".to_string())
        })?;

        Ok(DerivedMetadata {
            folder_name: paths.folder_name,
            folder_path: paths.folder_path,
            title: readme.title.clone(),
            description: readme.description.clone(),
            images: paths.images,
            keywords: readme.keywords(),
            relevant_apis: readme.sorted_apis(),
            snippets: paths.snippets,
        })
    }
}

/// Everything that can be known about a sample without its stored metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedMetadata {
    pub folder_name: String,
    pub folder_path: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub keywords: Vec<String>,
    pub relevant_apis: Vec<String>,
    /// Sorted
    pub snippets: Vec<String>,
}

/// The bounded set of stored values allowed to replace derived ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// Stored description is a substring of the normalized README description
    ShortenedDescription,
    /// Stored snippets are the derived snippets in another order
    SnippetOrder,
}

impl fmt::Display for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Override::ShortenedDescription => write!(f, "shortened description"),
            Override::SnippetOrder => write!(f, "snippet order"),
        }
    }
}

impl DerivedMetadata {
    /// Take the stored pass-through fields, apply the overrides that hold,
    /// and freeze the result.
    pub fn reconcile(self, stored: &StoredMetadata) -> MetadataRecord {
        let mut applied = Vec::new();

        let mut description = self.description;
        if sub_special_char(&description).contains(&stored.description) {
            if description != stored.description {
                applied.push(Override::ShortenedDescription);
            }
            description = stored.description.clone();
        }

        let mut snippets = self.snippets;
        let mut stored_sorted = stored.snippets.clone();
        stored_sorted.sort();
        if stored_sorted == snippets {
            if snippets != stored.snippets {
                applied.push(Override::SnippetOrder);
            }
            snippets = stored.snippets.clone();
        }

        for rule in &applied {
            debug!("Applied {rule} override for {}", self.folder_name);
        }

        MetadataRecord {
            folder_name: self.folder_name,
            folder_path: self.folder_path,
            category: stored.category.clone(),
            class_name: stored.class_name.clone(),
            description,
            images: self.images,
            keywords: self.keywords,
            offline_data: stored.offline_data.clone(),
            redirect_from: stored.redirect_from.clone(),
            relevant_apis: self.relevant_apis,
            snippets,
            title: self.title,
            applied,
        }
    }
}

/// Frozen metadata record, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    #[serde(skip)]
    folder_name: String,
    #[serde(skip)]
    folder_path: String,
    category: String,
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    class_name: Option<Value>,
    description: String,
    images: Vec<String>,
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offline_data: Option<Value>,
    redirect_from: Vec<String>,
    relevant_apis: Vec<String>,
    snippets: Vec<String>,
    title: String,
    #[serde(skip)]
    applied: Vec<Override>,
}

impl MetadataRecord {
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    pub fn applied_overrides(&self) -> &[Override] {
        &self.applied
    }

    /// Canonical JSON text of the record
    pub fn flush_to_json_string(&self) -> Result<String> {
        let value = serde_json::to_value(self)
            .map_err(|err| CheckError::ParseError(format!("cannot serialize record: {err}")))?;
        to_canonical_json(&value)
    }

    /// Validate the category against the taxonomy and folder placement
    pub fn check_category(&self, hint: Option<&str>, config: &CheckerConfig) -> Result<()> {
        category::check_category(&self.category, Path::new(&self.folder_path), hint, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(description: &str, snippets: &[&str]) -> DerivedMetadata {
        DerivedMetadata {
            folder_name: "display_map".to_string(),
            folder_path: "samples/maps/display_map".to_string(),
            title: "Display map".to_string(),
            description: description.to_string(),
            images: vec!["display_map.png".to_string()],
            keywords: vec!["map".to_string(), "ArcGISMap".to_string()],
            relevant_apis: vec!["ArcGISMap".to_string()],
            snippets: snippets.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn stored(description: &str, snippets: &[&str]) -> StoredMetadata {
        StoredMetadata::from_value(serde_json::json!({
            "category": "Maps",
            "description": description,
            "redirect_from": [],
            "snippets": snippets,
        }))
        .unwrap()
    }

    #[test]
    fn test_shortened_description_override() {
        let record = derived("Display a map — quickly.", &["a.py"])
            .reconcile(&stored("Display a map", &["a.py"]));
        assert_eq!(record.description(), "Display a map");
        assert_eq!(record.applied_overrides(), &[Override::ShortenedDescription]);
    }

    #[test]
    fn test_unrelated_description_kept() {
        let record = derived("Display a map.", &["a.py"])
            .reconcile(&stored("Show a scene.", &["a.py"]));
        assert_eq!(record.description(), "Display a map.");
        assert!(record.applied_overrides().is_empty());
    }

    #[test]
    fn test_snippet_order_override() {
        // derived snippets are always sorted
        let record = derived("d.", &["a.py", "b.py"]).reconcile(&stored("d.", &["b.py", "a.py"]));
        assert_eq!(record.snippets(), &["b.py".to_string(), "a.py".to_string()]);
        assert_eq!(record.applied_overrides(), &[Override::SnippetOrder]);
    }

    #[test]
    fn test_different_snippet_sets_kept() {
        let record = derived("d.", &["a.py", "b.py"]).reconcile(&stored("d.", &["a.py"]));
        assert_eq!(record.snippets(), &["a.py".to_string(), "b.py".to_string()]);
        assert!(record.applied_overrides().is_empty());
    }

    #[test]
    fn test_flush_omits_absent_optionals() {
        let record = derived("d.", &["a.py"]).reconcile(&stored("d.", &["a.py"]));
        let text = record.flush_to_json_string().unwrap();
        assert!(!text.contains("className"));
        assert!(!text.contains("offline_data"));
        assert!(!text.contains("folder_name"));
        let keys: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("    \""))
            .map(|l| l.trim().split('"').nth(1).unwrap())
            .collect();
        assert_eq!(
            keys,
            vec![
                "category",
                "description",
                "images",
                "keywords",
                "redirect_from",
                "relevant_apis",
                "snippets",
                "title"
            ]
        );
    }

    #[test]
    fn test_derive_requires_both_halves() {
        let config = CheckerConfig::default();
        let err = MetadataBuilder::new("nowhere", &config).derive().unwrap_err();
        assert!(matches!(err, CheckError::ParseError(_)));
    }
}
