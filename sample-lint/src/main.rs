use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only check results
    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli::commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Metadata(args) => {
            debug!("Metadata command: {:?}", args);
            cli::commands::metadata::execute(args, config)
        }
        Commands::Readme(args) => {
            debug!("Readme command: {:?}", args);
            cli::commands::readme::execute(args, config)
        }
    }
}
