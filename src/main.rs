use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use nu_ansi_term::Color;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod config;
mod error;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::Engine;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout holds only the summary
    let default_filter = if cli.verbose { "summarizer=debug" } else { "summarizer=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    let plain = cli.no_color || !std::io::stderr().is_terminal();
    if let Err(e) = run(cli).await {
        let message = format!("❌ Error: {:#}", e);
        if plain {
            eprintln!("{}", message);
        } else {
            eprintln!("{}", Color::Red.paint(message));
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting Summarizer v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default(cli.config.as_deref())?;
    let color = config.output.color && !cli.no_color && std::io::stdout().is_terminal();
    debug!("Color output: {}", color);

    // Create the engine; a missing API key fails here, before any work
    let engine = Engine::new(config, cli.apikey.clone(), color)?;

    cli.execute(engine).await
}
