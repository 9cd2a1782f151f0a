use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use charmil_init::cli::{Cli, Command};
use charmil_init::config::Config;
use charmil_init::prompt::TerminalPrompt;
use charmil_init::scaffold::run_init;
use charmil_update::BuildInfo;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = match Config::discover(&cli.config) {
        Ok(config) => config,
        Err(e) => exit_with_error(e),
    };

    let build = BuildInfo::detect().with_coordinates(&config.update.owner, &config.update.repo);
    let check_updates = config.update.enabled && !cli.no_update_check;
    let timeout = Duration::from_secs(config.update.timeout);

    let result = match &cli.command {
        Command::Init(args) => run_init(config, args, &TerminalPrompt),
    };

    if let Err(e) = result {
        exit_with_error(e);
    }

    if check_updates {
        charmil_update::notify_from_github(&build, timeout).await;
    }

    Ok(())
}

/// Report a fatal error on stderr regardless of the log filter, then exit 1.
fn exit_with_error(e: anyhow::Error) -> ! {
    tracing::debug!("{:?}", e);
    eprintln!("Error: {:#}", e);
    std::process::exit(1);
}
