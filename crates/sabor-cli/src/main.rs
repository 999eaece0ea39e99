use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use sabor_client::SaborClient;
use sabor_config::SaborConfig;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sabor error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    let flags = cli.global_flags();

    let config = SaborConfig::load_with_dotenv().context("failed to load configuration")?;
    let store = sabor_auth::open_store(&config.auth).context("failed to open session store")?;
    let client = Arc::new(
        SaborClient::new(&config.api, store).context("failed to build API client")?,
    );
    tracing::debug!(base_url = %client.base_url(), "client ready");

    let ctx = commands::CommandContext {
        client,
        flags,
        default_limit: config.general.default_limit,
    };
    commands::dispatch(cli.command, &ctx).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SABOR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
