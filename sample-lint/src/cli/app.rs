use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sample-lint",
    version,
    about = "Sample Lint - Keep sample READMEs and their metadata in sync",
    long_about = "Sample Lint checks a single sample folder. On success it exits with zero and prints nothing. On failure the violations are printed and it exits with a non-zero code."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare README-derived metadata with README.metadata.json
    #[command(about = "Check that README.metadata.json matches what the README and folder imply")]
    Metadata(MetadataArgs),

    /// Check README style
    #[command(about = "Check README headings, title section, APIs and tags")]
    Readme(ReadmeArgs),
}

#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Path to a single sample folder
    #[arg(short, long, help = "Path to a single sample folder")]
    pub single: PathBuf,

    /// Category the sample is expected to belong to
    #[arg(short = 'g', long, help = "Expected category of the sample")]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReadmeArgs {
    /// Path to a single sample folder
    #[arg(short, long, help = "Path to a single sample folder")]
    pub single: PathBuf,
}
