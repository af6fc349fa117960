//! Title block: `# Title`, one description line, then screenshot images

use regex_utils::{readme, text};

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::readme::ReadmeDocument;

pub fn check_format_title_section(
    doc: &ReadmeDocument,
    config: &CheckerConfig,
) -> Result<(), CheckError> {
    let lines = doc.head_lines();
    let mut problems = Vec::new();

    match lines.first() {
        None => problems.push("Missing title and description.".to_string()),
        Some(line) => match readme::TITLE_LINE.captures(line) {
            None => problems.push(format!("Title must be a level-1 heading: '{line}'.")),
            Some(caps) => {
                let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
                problems.extend(title_problems(title));
            }
        },
    }

    match lines.get(1) {
        None if !lines.is_empty() => problems.push("Missing description.".to_string()),
        None => {}
        Some(line) => {
            let line = line.trim();
            if line.starts_with('#') || line.starts_with("![") {
                problems.push(format!("Description must directly follow the title: '{line}'."));
            } else if !line.ends_with('.') {
                problems.push("Description must end with a period.".to_string());
            }
        }
    }

    let rest = lines.iter().skip(2).map(|line| line.trim());
    let mut images = 0;
    for line in rest {
        if !readme::IMAGE_LINE.is_match(line) {
            problems.push(format!("Unexpected content in title section: '{line}'."));
            continue;
        }
        images += 1;
        for target in readme::image_targets(line) {
            if !is_image_target(&target, config) {
                problems.push(format!("Malformed image URL: '{target}'."));
            }
        }
    }
    if lines.len() >= 2 && images == 0 {
        problems.push("Missing screenshot image after the description.".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CheckError::TitleFormatError(problems.join(" ")))
    }
}

fn title_problems(title: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if !title.chars().next().is_some_and(|c| c.is_uppercase() || c.is_ascii_digit()) {
        problems.push(format!("Title must start with a capital letter: '{title}'."));
    }
    if title.ends_with(|c: char| c.is_ascii_punctuation() && c != ')') {
        problems.push(format!("Title must not end with punctuation: '{title}'."));
    }
    problems
}

/// An absolute http(s) URL, or a relative path to an image file
fn is_image_target(target: &str, config: &CheckerConfig) -> bool {
    if target.starts_with("http://") || target.starts_with("https://") {
        return text::is_http_url(target);
    }
    let relative = !target.is_empty()
        && !target.starts_with('/')
        && !target.contains("://")
        && !target.chars().any(char::is_whitespace);
    relative
        && target
            .rsplit_once('.')
            .is_some_and(|(_, ext)| config.is_image_extension(ext))
}
