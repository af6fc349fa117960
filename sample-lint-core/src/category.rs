//! Category validation

use std::path::Path;

use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};
use crate::paths::{normalize_path, parent_dir_name};

/// Directory name samples of a category live under, e.g.
/// `Edit and manage data` becomes `edit_and_manage_data`.
pub fn category_slug(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    for ch in category.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// Check that the category is known, agrees with the hint when one is
/// given, and matches the directory the sample folder sits in.
pub fn check_category(
    category: &str,
    folder: &Path,
    hint: Option<&str>,
    config: &CheckerConfig,
) -> Result<()> {
    let folder_path = normalize_path(folder);
    if !config.categories.iter().any(|c| c == category) {
        return Err(CheckError::CategoryError(format!(
            "{} - invalid category '{category}', expected one of: {}",
            folder_path.display(),
            config.categories.join(", ")
        )));
    }

    if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
        if hint != category {
            return Err(CheckError::CategoryError(format!(
                "{} - expected category '{hint}', found '{category}'",
                folder_path.display()
            )));
        }
    }

    let expected_dir = category_slug(category);
    match parent_dir_name(folder) {
        Some(actual_dir) if actual_dir == expected_dir => Ok(()),
        actual_dir => Err(CheckError::CategoryError(format!(
            "{} - category '{category}' belongs under '{expected_dir}/', found under '{}/'",
            folder_path.display(),
            actual_dir.unwrap_or_default()
        ))),
    }
}
