//! Relevant API and tag lists

use std::collections::HashSet;

use regex_utils::symbol;

use crate::error::CheckError;
use crate::readme::{API_SECTION, ReadmeDocument, TAGS_SECTION};

/// API entries must look like symbols, be unique and be sorted
pub fn check_format_apis(doc: &ReadmeDocument) -> Result<(), CheckError> {
    let apis = doc
        .api_entries()
        .ok_or_else(|| CheckError::ApiFormatError(format!("Missing '{API_SECTION}' section.")))?;
    if apis.is_empty() {
        return Err(CheckError::ApiFormatError(format!("'{API_SECTION}' section is empty.")));
    }

    let mut problems = Vec::new();
    let malformed: Vec<&str> =
        apis.iter().map(String::as_str).filter(|api| !symbol::is_api_name(api)).collect();
    if !malformed.is_empty() {
        problems.push(format!("Malformed API names: {}.", malformed.join(", ")));
    }
    let duplicates = duplicates(&apis);
    if !duplicates.is_empty() {
        problems.push(format!("Duplicate APIs: {}.", duplicates.join(", ")));
    }
    if !is_sorted_case_insensitive(&apis) {
        problems.push("APIs are not sorted alphabetically.".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CheckError::ApiFormatError(problems.join(" ")))
    }
}

/// Tags must be lowercase, use only allowed characters, be unique and sorted
pub fn check_format_tags(doc: &ReadmeDocument) -> Result<(), CheckError> {
    let tags = doc
        .tag_entries()
        .ok_or_else(|| CheckError::TagFormatError(format!("Missing '{TAGS_SECTION}' section.")))?;
    if tags.is_empty() {
        return Err(CheckError::TagFormatError(format!("'{TAGS_SECTION}' section is empty.")));
    }

    let mut problems = Vec::new();
    let invalid: Vec<&str> =
        tags.iter().map(String::as_str).filter(|tag| !symbol::is_tag(tag)).collect();
    if !invalid.is_empty() {
        problems.push(format!(
            "Tags must be lowercase words without special characters: {}.",
            invalid.join(", ")
        ));
    }
    let duplicates = duplicates(&tags);
    if !duplicates.is_empty() {
        problems.push(format!("Duplicate tags: {}.", duplicates.join(", ")));
    }
    if !is_sorted_case_insensitive(&tags) {
        problems.push("Tags are not sorted alphabetically.".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CheckError::TagFormatError(problems.join(" ")))
    }
}

/// Tags restating an API name, ignoring case, are redundant
pub fn check_redundant_apis_in_tags(doc: &ReadmeDocument) -> Result<(), CheckError> {
    let (Some(apis), Some(tags)) = (doc.api_entries(), doc.tag_entries()) else {
        return Ok(());
    };
    let apis: HashSet<String> = apis.iter().map(|api| api.to_lowercase()).collect();
    let redundant: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|tag| apis.contains(&tag.to_lowercase()))
        .collect();
    if redundant.is_empty() {
        Ok(())
    } else {
        Err(CheckError::RedundantTagError(format!(
            "Tags contain APIs: {}.",
            redundant.join(", ")
        )))
    }
}

fn duplicates(items: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut repeated: Vec<&str> = Vec::new();
    for item in items {
        if !seen.insert(item.as_str()) && !repeated.contains(&item.as_str()) {
            repeated.push(item);
        }
    }
    repeated
}

fn is_sorted_case_insensitive(items: &[String]) -> bool {
    items.windows(2).all(|pair| pair[0].to_lowercase() <= pair[1].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(apis: &[&str], tags: &str) -> ReadmeDocument {
        let mut markdown = String::from("# Title\n\nDescription.\n\n## Relevant API\n\n");
        for api in apis {
            markdown.push_str(&format!("* {api}\n"));
        }
        markdown.push_str(&format!("\n## Tags\n\n{tags}\n"));
        ReadmeDocument::from_markdown(&markdown)
    }

    #[test]
    fn test_valid_references() {
        let doc = doc(&["ArcGISMap", "ArcGISMapView", "Basemap"], "basemap style, map, tile");
        assert!(check_format_apis(&doc).is_ok());
        assert!(check_format_tags(&doc).is_ok());
        assert!(check_redundant_apis_in_tags(&doc).is_ok());
    }

    #[test]
    fn test_api_problems() {
        let doc = doc(&["Basemap", "ArcGISMap", "Arc GIS", "Basemap"], "map");
        let message = check_format_apis(&doc).unwrap_err().to_string();
        assert!(message.contains("Malformed API names: Arc GIS."));
        assert!(message.contains("Duplicate APIs: Basemap."));
        assert!(message.contains("not sorted"));
    }

    #[test]
    fn test_missing_api_section() {
        let doc = ReadmeDocument::from_markdown("# Title\n\nDescription.\n\n## Tags\n\nmap\n");
        let err = check_format_apis(&doc).unwrap_err();
        assert!(matches!(err, CheckError::ApiFormatError(_)));
        // nothing to compare against, so no redundancy is reported
        assert!(check_redundant_apis_in_tags(&doc).is_ok());
    }

    #[test]
    fn test_tag_problems() {
        let doc = doc(&["ArcGISMap"], "Map, tile, map;view, tile");
        let err = check_format_tags(&doc).unwrap_err();
        assert!(matches!(err, CheckError::TagFormatError(_)));
        let message = err.to_string();
        assert!(message.contains("Map, map;view"));
        assert!(message.contains("Duplicate tags: tile."));
        assert!(message.contains("not sorted"));
    }

    #[test]
    fn test_redundant_tag_case_insensitive() {
        let doc = doc(&["FeatureLayer"], "feature, featurelayer");
        let err = check_redundant_apis_in_tags(&doc).unwrap_err();
        assert!(matches!(err, CheckError::RedundantTagError(_)));
        assert!(err.to_string().contains("featurelayer"));
    }
}
