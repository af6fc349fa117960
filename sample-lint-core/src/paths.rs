//! Facts about a sample folder that come from its file layout

use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};

/// Path-derived part of a metadata record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePaths {
    /// Final path segment, e.g. `display_map`
    pub folder_name: String,
    /// Lexically normalized folder path
    pub folder_path: String,
    /// Snippet files under the source directory, relative, sorted
    pub snippets: Vec<String>,
    /// Image files directly in the folder, sorted
    pub images: Vec<String>,
}

impl SamplePaths {
    pub fn derive(folder: &Path, config: &CheckerConfig) -> Result<Self> {
        if !folder.is_dir() {
            return Err(CheckError::PathError(format!(
                "sample folder does not exist - {}",
                folder.display()
            )));
        }
        let normalized = normalize_path(folder);
        let folder_name = folder_name(folder)?;

        let source_dir = folder.join(&config.source_dir);
        if !source_dir.is_dir() {
            return Err(CheckError::PathError(format!(
                "source directory '{}' is missing in {}",
                config.source_dir,
                normalized.display()
            )));
        }

        let snippets = snippet_files(&source_dir, config)?;
        if snippets.is_empty() {
            return Err(CheckError::PathError(format!(
                "no source files found in {}",
                source_dir.display()
            )));
        }
        let images = image_files(folder, config)?;
        debug!(
            "Derived {} snippet(s) and {} image(s) for {}",
            snippets.len(),
            images.len(),
            folder_name
        );

        Ok(Self {
            folder_name,
            folder_path: normalized.to_string_lossy().into_owned(),
            snippets,
            images,
        })
    }
}

/// Drop `.` components and trailing separators without touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf =
        path.components().filter(|c| !matches!(c, Component::CurDir)).collect();
    if normalized.as_os_str().is_empty() { PathBuf::from(".") } else { normalized }
}

/// Final segment of the folder path, resolving `.` and `..` when needed
pub fn folder_name(folder: &Path) -> Result<String> {
    let named = match normalize_path(folder).file_name() {
        Some(name) => Some(name.to_string_lossy().into_owned()),
        None => std::fs::canonicalize(folder)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned())),
    };
    named.ok_or_else(|| {
        CheckError::PathError(format!("cannot determine folder name of {}", folder.display()))
    })
}

/// Name of the directory containing the sample folder
pub fn parent_dir_name(folder: &Path) -> Option<String> {
    let resolved = match normalize_path(folder).parent() {
        Some(parent) if parent.file_name().is_some() => parent.to_path_buf(),
        _ => std::fs::canonicalize(folder).ok()?.parent()?.to_path_buf(),
    };
    resolved.file_name().map(|name| name.to_string_lossy().into_owned())
}

fn snippet_files(source_dir: &Path, config: &CheckerConfig) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir).follow_links(false) {
        let entry = entry.map_err(|err| {
            CheckError::PathError(format!("cannot traverse {}: {err}", source_dir.display()))
        })?;
        if !entry.file_type().is_file() || is_hidden(entry.path()) {
            continue;
        }
        let matches = extension_of(entry.path()).is_some_and(|ext| config.is_snippet_extension(&ext));
        if !matches {
            continue;
        }
        let relative = entry.path().strip_prefix(source_dir).unwrap_or(entry.path());
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        files.push(name);
    }
    files.sort();
    Ok(files)
}

fn image_files(folder: &Path, config: &CheckerConfig) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(folder).map_err(|err| CheckError::io(folder, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| CheckError::io(folder, err))?;
        let path = entry.path();
        if !path.is_file() || is_hidden(&path) {
            continue;
        }
        if extension_of(&path).is_some_and(|ext| config.is_image_extension(&ext)) {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().into_owned())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name.to_string_lossy().starts_with('.'))
}
