//! Section heading vocabulary and order

use std::collections::HashSet;

use crate::config::HeadingRules;
use crate::error::CheckError;
use crate::readme::ReadmeDocument;

/// Headings must be known, unique, complete and in vocabulary order
pub fn check_format_heading(doc: &ReadmeDocument, rules: &HeadingRules) -> Result<(), CheckError> {
    let headings = doc.headings();
    let mut problems = Vec::new();

    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = headings.iter().copied().filter(|h| !seen.insert(*h)).collect();
    if !duplicates.is_empty() {
        problems.push(format!("Duplicate sections: {}.", quoted(&duplicates)));
    }

    let missing: Vec<&str> = rules
        .required
        .iter()
        .map(String::as_str)
        .filter(|r| !headings.contains(r))
        .collect();
    if !missing.is_empty() {
        problems.push(format!("Missing essential sections: {}.", quoted(&missing)));
    }

    let unexpected: Vec<&str> = headings
        .iter()
        .copied()
        .filter(|h| !rules.allowed.iter().any(|a| a == h))
        .collect();
    if !unexpected.is_empty() {
        problems.push(format!(
            "Unexpected header or extra whitespace: {}.",
            quoted(&unexpected)
        ));
    }

    // Walk the vocabulary once; every known heading must be found after the
    // previous one.
    let known: Vec<&str> =
        headings.iter().copied().filter(|h| rules.allowed.iter().any(|a| a == h)).collect();
    let mut vocabulary = rules.allowed.iter();
    for heading in &known {
        if !vocabulary.any(|a| a == heading) {
            problems.push(format!("Wrong order at: '{heading}'."));
            break;
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CheckError::HeadingFormatError(problems.join(" ")))
    }
}

fn quoted(items: &[&str]) -> String {
    items.iter().map(|i| format!("'{i}'")).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(headings: &[&str]) -> ReadmeDocument {
        let mut markdown = String::from("# Title\n\nDescription.\n\n");
        for heading in headings {
            markdown.push_str(&format!("## {heading}\n\nBody.\n\n"));
        }
        ReadmeDocument::from_markdown(&markdown)
    }

    fn rules(names: &[&str]) -> HeadingRules {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        HeadingRules { allowed: names.clone(), required: names }
    }

    #[test]
    fn test_default_template_passes() {
        let doc = doc(&[
            "Use case",
            "How to use the sample",
            "How it works",
            "Relevant API",
            "About the data",
            "Tags",
        ]);
        assert!(check_format_heading(&doc, &HeadingRules::default()).is_ok());
    }

    #[test]
    fn test_wrong_order() {
        let doc = doc(&["How it works", "Use case"]);
        let err = check_format_heading(&doc, &rules(&["Use case", "How it works"])).unwrap_err();
        assert!(matches!(err, CheckError::HeadingFormatError(_)));
        assert!(err.to_string().contains("Wrong order at: 'Use case'."));
    }

    #[test]
    fn test_missing_and_unexpected() {
        let doc = doc(&["Use case", "How it Works"]);
        let err = check_format_heading(&doc, &rules(&["Use case", "How it works"])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Missing essential sections: 'How it works'."));
        assert!(message.contains("Unexpected header or extra whitespace: 'How it Works'."));
    }

    #[test]
    fn test_duplicate_heading() {
        let doc = doc(&["Use case", "Use case", "How it works"]);
        let err = check_format_heading(&doc, &rules(&["Use case", "How it works"])).unwrap_err();
        assert!(err.to_string().contains("Duplicate sections: 'Use case'."));
    }
}
