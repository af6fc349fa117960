//! Typed fields extracted from a README document

use regex_utils::readme;

use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};
use crate::readme::document::{API_SECTION, ReadmeDocument, TAGS_SECTION};

/// README fields needed to derive a metadata record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReadme {
    pub title: String,
    pub description: String,
    /// Image targets referenced in the head block
    pub images: Vec<String>,
    pub headings: Vec<String>,
    /// API names in the order they are written
    pub apis: Vec<String>,
    /// Tags in the order they are written
    pub tags: Vec<String>,
    /// Source files named in inline code
    pub snippet_refs: Vec<String>,
}

impl ParsedReadme {
    /// Extract the fields, failing when a required block is missing
    pub fn from_document(doc: &ReadmeDocument, config: &CheckerConfig) -> Result<Self> {
        let head = doc.head_lines();
        if head.len() < 2 {
            return Err(CheckError::ParseError(
                "README should contain a title and a description before the first section."
                    .to_string(),
            ));
        }
        let title = readme::strip_heading_prefix(head[0]);
        let description = head[1].trim().to_string();
        if title.is_empty() {
            return Err(CheckError::ParseError("README title is empty.".to_string()));
        }

        let apis = doc.api_entries().ok_or_else(|| missing_section(API_SECTION))?;
        if apis.is_empty() {
            return Err(empty_section(API_SECTION));
        }
        let tags = doc.tag_entries().ok_or_else(|| missing_section(TAGS_SECTION))?;
        if tags.is_empty() {
            return Err(empty_section(TAGS_SECTION));
        }

        Ok(Self {
            title,
            description,
            images: readme::image_targets(&doc.head),
            headings: doc.headings().into_iter().map(str::to_string).collect(),
            apis,
            tags,
            snippet_refs: doc.snippet_refs(config),
        })
    }

    /// Keywords as published: tags that do not restate an API, then the APIs
    pub fn keywords(&self) -> Vec<String> {
        let apis = self.sorted_apis();
        let lowered: Vec<String> = apis.iter().map(|api| api.to_lowercase()).collect();
        let mut keywords: Vec<String> = self
            .tags
            .iter()
            .filter(|tag| !lowered.contains(&tag.to_lowercase()))
            .cloned()
            .collect();
        keywords.sort();
        keywords.dedup();
        keywords.extend(apis);
        keywords
    }

    pub fn sorted_apis(&self) -> Vec<String> {
        let mut apis = self.apis.clone();
        apis.sort();
        apis.dedup();
        apis
    }
}

fn missing_section(name: &str) -> CheckError {
    CheckError::ParseError(format!("README is missing the '{name}' section."))
}

fn empty_section(name: &str) -> CheckError {
    CheckError::ParseError(format!("README '{name}' section is empty."))
}
