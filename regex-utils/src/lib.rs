//! Regex utilities for sample-lint
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns for the README head block (title, description, images)
pub mod readme {
    use super::*;

    /// A level-1 ATX heading: exactly one `#`, whitespace, then text
    pub static TITLE_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^#[ \t]+([^#\s].*)$").expect("Invalid regex pattern")
    });

    /// Any run of leading heading markers
    pub static HEADING_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^#+[ \t]*").expect("Invalid regex pattern"));

    /// Markdown image reference, capturing alt text and target
    pub static IMAGE_REF: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"!\[([^\]]*)\]\(([^)\s]*)\)").expect("Invalid regex pattern")
    });

    /// A line that holds nothing but a single image reference
    pub static IMAGE_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^!\[[^\]]*\]\([^)\s]+\)$").expect("Invalid regex pattern")
    });

    /// Bullet list marker at the start of a line
    pub static LIST_MARKER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*[*+\-]\s+").expect("Invalid regex pattern"));

    /// Extract every image target in a block of text
    pub fn image_targets(text: &str) -> Vec<String> {
        IMAGE_REF
            .captures_iter(text)
            .filter_map(|caps| caps.get(2).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Remove leading `#` markers and surrounding whitespace
    pub fn strip_heading_prefix(line: &str) -> String {
        HEADING_PREFIX.replace(line.trim(), "").trim().to_string()
    }

    /// Remove a leading list marker and inline-code backticks
    pub fn strip_list_marker(line: &str) -> String {
        LIST_MARKER.replace(line, "").trim().trim_matches('`').trim().to_string()
    }
}

/// Symbol and vocabulary shapes used by the format checks
pub mod symbol {
    use super::*;

    /// `Ident(.Ident)*` with an optional trailing `()`
    pub static API_NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*(?:\(\))?$")
            .expect("Invalid regex pattern")
    });

    /// Lowercase tag made of letters, digits, spaces, apostrophes, dots and hyphens
    pub static TAG: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[a-z0-9](?:[a-z0-9 '.\-]*[a-z0-9.'])?$").expect("Invalid regex pattern")
    });

    /// Relative file name with an extension, as referenced from prose
    pub static FILE_NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[\w\-./]+\.([A-Za-z0-9]+)$").expect("Invalid regex pattern")
    });

    pub fn is_api_name(text: &str) -> bool {
        API_NAME.is_match(text)
    }

    pub fn is_tag(text: &str) -> bool {
        TAG.is_match(text)
    }

    /// Extension of a referenced file name, if the text looks like one
    pub fn file_extension(text: &str) -> Option<&str> {
        FILE_NAME.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
    }
}

/// Free-text helpers
pub mod text {
    use super::*;

    /// Characters removed before lenient description comparison
    pub static SPECIAL_CHARS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[@_!#$%^&*<>?|/\\}{~:]").expect("Invalid regex pattern"));

    pub static HTTP_URL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^https?://[A-Za-z0-9][^\s]*$").expect("Invalid regex pattern")
    });

    /// Strip every special character from the text
    pub fn strip_special_chars(text: &str) -> String {
        SPECIAL_CHARS.replace_all(text, "").into_owned()
    }

    pub fn is_http_url(text: &str) -> bool {
        HTTP_URL.is_match(text)
    }
}
