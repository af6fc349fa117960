//! The `README.metadata.json` file as stored on disk

use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};
use crate::metadata::canonical::to_canonical_json;

#[derive(Debug, Deserialize)]
struct StoredFields {
    category: Option<String>,
    description: String,
    redirect_from: Vec<String>,
    snippets: Vec<String>,
    #[serde(rename = "className")]
    class_name: Option<String>,
}

/// Stored metadata: the typed fields the record borrows, plus the whole
/// document so that every key, known or not, takes part in the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMetadata {
    pub category: String,
    pub description: String,
    pub redirect_from: Vec<String>,
    pub snippets: Vec<String>,
    /// Present whenever the key is, including an explicit `null`
    pub offline_data: Option<Value>,
    /// Present whenever the key is; a string or `null`
    pub class_name: Option<Value>,
    document: Value,
}

impl StoredMetadata {
    pub fn load(folder: &Path, config: &CheckerConfig) -> Result<Self> {
        let path = folder.join(&config.metadata_file);
        let content = std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => CheckError::PathError(format!(
                "stored metadata not found - {}",
                path.display()
            )),
            _ => CheckError::io(&path, err),
        })?;
        debug!("Loaded stored metadata {}", path.display());
        Self::from_json_str(&content).map_err(|err| match err {
            CheckError::ParseError(msg) => {
                CheckError::ParseError(format!("{} - {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)
            .map_err(|err| CheckError::ParseError(format!("invalid JSON: {err}")))?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self> {
        if !document.is_object() {
            return Err(CheckError::ParseError(
                "stored metadata must be a JSON object".to_string(),
            ));
        }
        let fields: StoredFields = serde_json::from_value(document.clone())
            .map_err(|err| CheckError::ParseError(format!("invalid stored metadata: {err}")))?;
        let category = fields.category.ok_or_else(|| {
            CheckError::CategoryError("stored metadata has no 'category' key".to_string())
        })?;

        Ok(Self {
            category,
            description: fields.description,
            redirect_from: fields.redirect_from,
            snippets: fields.snippets,
            // serde folds a `null` into `None`, so presence comes from the document
            offline_data: document.get("offline_data").cloned(),
            class_name: fields
                .class_name
                .map(Value::String)
                .or_else(|| document.get("className").cloned()),
            document,
        })
    }

    /// The whole stored document
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Canonical text of the stored document
    pub fn to_canonical_json(&self) -> Result<String> {
        to_canonical_json(&self.document)
    }
}
