//! README style checks
//!
//! Each check inspects a [`ReadmeDocument`] and returns its own outcome.
//! None of them stops the others; the caller decides how to report.

pub mod headings;
pub mod references;
pub mod title;

use std::fmt;

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::readme::ReadmeDocument;

pub use headings::check_format_heading;
pub use references::{check_format_apis, check_format_tags, check_redundant_apis_in_tags};
pub use title::check_format_title_section;

/// The checks a README run reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCheck {
    /// Strict field extraction
    Parse,
    Heading,
    TitleSection,
    Apis,
    Tags,
    RedundantApisInTags,
}

impl fmt::Display for FormatCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatCheck::Parse => "parse",
            FormatCheck::Heading => "heading",
            FormatCheck::TitleSection => "title section",
            FormatCheck::Apis => "relevant APIs",
            FormatCheck::Tags => "tags",
            FormatCheck::RedundantApisInTags => "redundant APIs in tags",
        };
        f.write_str(name)
    }
}

/// Result of one check
#[derive(Debug)]
pub struct CheckOutcome {
    pub check: FormatCheck,
    pub result: Result<(), CheckError>,
}

impl CheckOutcome {
    pub fn new(check: FormatCheck, result: Result<(), CheckError>) -> Self {
        Self { check, result }
    }

    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&CheckError> {
        self.result.as_ref().err()
    }
}

/// Run the five style checks, in a fixed order, without short-circuiting
pub fn run_format_checks(doc: &ReadmeDocument, config: &CheckerConfig) -> Vec<CheckOutcome> {
    vec![
        CheckOutcome::new(FormatCheck::Heading, check_format_heading(doc, &config.headings)),
        CheckOutcome::new(FormatCheck::TitleSection, check_format_title_section(doc, config)),
        CheckOutcome::new(FormatCheck::Apis, check_format_apis(doc)),
        CheckOutcome::new(FormatCheck::Tags, check_format_tags(doc)),
        CheckOutcome::new(FormatCheck::RedundantApisInTags, check_redundant_apis_in_tags(doc)),
    ]
}

/// Every outcome of a README run
#[derive(Debug)]
pub struct FormatReport {
    pub folder_path: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl FormatReport {
    pub fn new(folder_path: impl Into<String>) -> Self {
        Self { folder_path: folder_path.into(), outcomes: Vec::new() }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn failures(&self) -> impl Iterator<Item = (FormatCheck, &CheckError)> {
        self.outcomes.iter().filter_map(|o| o.error().map(|err| (o.check, err)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    /// Numbered failure lines, one per failed check
    pub fn render(&self) -> String {
        self.failures()
            .enumerate()
            .map(|(idx, (_, err))| format!("{}. {} - {}", idx + 1, self.folder_path, err))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
