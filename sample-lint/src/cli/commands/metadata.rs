//! Metadata consistency command handler

use anyhow::Result;
use sample_lint_core::{CheckerConfig, MetadataChecker};
use tracing::info;

use crate::cli::app::MetadataArgs;

/// Check one sample; the first failure ends the run
pub fn execute(args: MetadataArgs, config: CheckerConfig) -> Result<()> {
    let checker = MetadataChecker::new(config);
    checker.run(&args.single, args.category.as_deref())?;
    info!("{} passed the metadata check", args.single.display());
    Ok(())
}
