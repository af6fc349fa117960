//! Structural split of a README into a head block and level-2 sections

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use regex_utils::{readme, symbol};
use std::path::Path;
use tracing::debug;

use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};

pub const API_SECTION: &str = "Relevant API";
pub const TAGS_SECTION: &str = "Tags";

/// One `## Heading` and the text up to the next level-2 heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    /// Non-empty body lines with surrounding whitespace removed
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines().map(str::trim).filter(|line| !line.is_empty())
    }
}

/// A README split into its head block and sections
///
/// Splitting never fails: any markdown yields a document, possibly with an
/// empty head or no sections. Deciding whether the shape is acceptable is
/// left to the extraction step and the format checks.
#[derive(Debug, Clone, Default)]
pub struct ReadmeDocument {
    /// Everything before the first level-2 heading
    pub head: String,
    pub sections: Vec<Section>,
    /// Text of every inline code span, in document order
    pub code_spans: Vec<String>,
}

impl ReadmeDocument {
    /// Read the README of a sample folder
    pub fn load(folder: &Path, config: &CheckerConfig) -> Result<Self> {
        let path = folder.join(&config.readme_file);
        if !path.is_file() {
            return Err(CheckError::ParseError(format!(
                "README not found - {}",
                path.display()
            )));
        }
        let content =
            std::fs::read_to_string(&path).map_err(|err| CheckError::io(&path, err))?;
        debug!("Loaded README {} ({} bytes)", path.display(), content.len());
        Ok(Self::from_markdown(&content))
    }

    pub fn from_markdown(content: &str) -> Self {
        let mut doc = ReadmeDocument::default();
        // (heading text, offset where the heading starts, offset where it ends)
        let mut headings: Vec<(String, usize, usize)> = Vec::new();
        let mut current: Option<(String, usize)> = None;

        for (event, range) in Parser::new(content).into_offset_iter() {
            match event {
                Event::Start(Tag::Heading { level: HeadingLevel::H2, .. }) => {
                    current = Some((String::new(), range.start));
                }
                Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                    if let Some((text, start)) = current.take() {
                        headings.push((text.trim().to_string(), start, range.end));
                    }
                }
                Event::Text(text) => {
                    if let Some((heading, _)) = current.as_mut() {
                        heading.push_str(&text);
                    }
                }
                Event::Code(code) => {
                    if let Some((heading, _)) = current.as_mut() {
                        heading.push_str(&code);
                    } else {
                        doc.code_spans.push(code.to_string());
                    }
                }
                _ => {}
            }
        }

        let head_end = headings.first().map(|(_, start, _)| *start).unwrap_or(content.len());
        doc.head = content[..head_end].to_string();

        for (idx, (heading, _, body_start)) in headings.iter().enumerate() {
            let body_end =
                headings.get(idx + 1).map(|(_, start, _)| *start).unwrap_or(content.len());
            let body_start = (*body_start).min(body_end);
            doc.sections.push(Section {
                heading: heading.clone(),
                body: content[body_start..body_end].to_string(),
            });
        }

        doc
    }

    /// Non-empty lines of the head block, right-trimmed
    pub fn head_lines(&self) -> Vec<&str> {
        self.head.lines().map(str::trim_end).filter(|line| !line.trim().is_empty()).collect()
    }

    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }

    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Entries of the API section as written, or `None` if the section is absent
    pub fn api_entries(&self) -> Option<Vec<String>> {
        self.section(API_SECTION).map(|section| {
            section
                .lines()
                .map(readme::strip_list_marker)
                .map(|entry| trim_trailing_punctuation(&entry))
                .filter(|entry| !entry.is_empty())
                .collect()
        })
    }

    /// Comma separated entries of the tags section, or `None` if absent
    pub fn tag_entries(&self) -> Option<Vec<String>> {
        self.section(TAGS_SECTION).map(|section| {
            section
                .lines()
                .flat_map(|line| line.split(','))
                .map(|tag| trim_trailing_punctuation(tag.trim()))
                .filter(|tag| !tag.is_empty())
                .collect()
        })
    }

    /// Inline code spans naming a source file with a snippet extension
    pub fn snippet_refs(&self, config: &CheckerConfig) -> Vec<String> {
        let mut refs: Vec<String> = Vec::new();
        for span in &self.code_spans {
            let span = span.trim();
            let is_snippet = symbol::file_extension(span)
                .is_some_and(|ext| config.is_snippet_extension(ext));
            if is_snippet && !refs.iter().any(|r| r == span) {
                refs.push(span.to_string());
            }
        }
        refs
    }
}

fn trim_trailing_punctuation(entry: &str) -> String {
    entry.trim().trim_end_matches([',', ';', '.']).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Display map

Display a map with an imagery basemap.

![Image of display map](display_map.png)

## Use case

The map is the fundamental building block.

## How it works

1. Create an `ArcGISMap` in `display_map.dart`.

```markdown
## Not a heading
```

## Relevant API

* ArcGISMap
* `ArcGISMapView`

## Tags

basemap style, map
";

    #[test]
    fn test_split_sections() {
        let doc = ReadmeDocument::from_markdown(README);
        assert_eq!(doc.headings(), vec!["Use case", "How it works", "Relevant API", "Tags"]);
        assert_eq!(
            doc.head_lines(),
            vec![
                "# Display map",
                "Display a map with an imagery basemap.",
                "![Image of display map](display_map.png)"
            ]
        );
        assert!(doc.section("How it works").unwrap().body.contains("## Not a heading"));
    }

    #[test]
    fn test_entries() {
        let doc = ReadmeDocument::from_markdown(README);
        assert_eq!(
            doc.api_entries(),
            Some(vec!["ArcGISMap".to_string(), "ArcGISMapView".to_string()])
        );
        assert_eq!(
            doc.tag_entries(),
            Some(vec!["basemap style".to_string(), "map".to_string()])
        );
    }

    #[test]
    fn test_snippet_refs() {
        let doc = ReadmeDocument::from_markdown(README);
        let config = CheckerConfig::default();
        assert_eq!(doc.snippet_refs(&config), vec!["display_map.dart".to_string()]);
    }

    #[test]
    fn test_no_sections() {
        let doc = ReadmeDocument::from_markdown("# Title\n\nJust prose.\n");
        assert!(doc.sections.is_empty());
        assert_eq!(doc.head_lines().len(), 2);
        assert_eq!(doc.api_entries(), None);
        assert_eq!(doc.tag_entries(), None);
    }
}
