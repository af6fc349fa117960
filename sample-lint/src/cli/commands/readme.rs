//! README style command handler

use anyhow::{Result, bail};
use sample_lint_core::{CheckerConfig, ReadmeChecker};

use crate::cli::app::ReadmeArgs;

/// Check one sample's README, printing every violation before failing
pub fn execute(args: ReadmeArgs, config: CheckerConfig) -> Result<()> {
    let report = ReadmeChecker::new(config).run(&args.single);
    if report.is_success() {
        return Ok(());
    }
    println!("{}", report.render());
    bail!(
        "{} error(s) occurred while checking {}.",
        report.failure_count(),
        report.folder_path
    )
}
