//! Entry points for checking a single sample folder
//!
//! [`MetadataChecker`] stops at the first failure: a record that cannot be
//! built cannot be compared. [`ReadmeChecker`] runs every style check and
//! reports all failures together.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::format::{CheckOutcome, FormatCheck, FormatReport, run_format_checks};
use crate::metadata::{MetadataBuilder, StoredMetadata, compare};
use crate::paths::normalize_path;
use crate::readme::{ParsedReadme, ReadmeDocument};

/// Compares derived metadata against `README.metadata.json`
#[derive(Debug, Clone, Default)]
pub struct MetadataChecker {
    config: CheckerConfig,
}

impl MetadataChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check one folder; the first failure is returned as is
    pub fn run(&self, folder: &Path, category_hint: Option<&str>) -> Result<()> {
        info!("Checking metadata of {}", folder.display());

        let mut builder = MetadataBuilder::new(folder, &self.config);
        builder.populate_from_readme()?;
        builder.populate_from_paths()?;
        let derived = builder.derive()?;

        let stored = StoredMetadata::load(folder, &self.config)?;
        let record = derived.reconcile(&stored);
        debug!(
            "Record for {} built with {} override(s)",
            record.folder_name(),
            record.applied_overrides().len()
        );

        compare(&record, &stored)?;
        record.check_category(category_hint, &self.config)?;

        info!("Metadata of {} is consistent", record.folder_path());
        Ok(())
    }
}

/// Runs the README style checks
#[derive(Debug, Clone, Default)]
pub struct ReadmeChecker {
    config: CheckerConfig,
}

impl ReadmeChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check one folder and collect every outcome
    pub fn run(&self, folder: &Path) -> FormatReport {
        info!("Checking README of {}", folder.display());
        let mut report = FormatReport::new(normalize_path(folder).to_string_lossy());

        let doc = match ReadmeDocument::load(folder, &self.config) {
            Ok(doc) => doc,
            Err(err) => {
                warn!("{}: {err}", folder.display());
                report.push(CheckOutcome::new(FormatCheck::Parse, Err(err)));
                return report;
            }
        };

        let parsed = ParsedReadme::from_document(&doc, &self.config).map(|_| ());
        report.push(CheckOutcome::new(FormatCheck::Parse, parsed));
        for outcome in run_format_checks(&doc, &self.config) {
            report.push(outcome);
        }

        for (check, err) in report.failures() {
            warn!("{} check failed for {}: {err}", check, report.folder_path);
        }
        report
    }
}
