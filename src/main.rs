use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use eca::config::Cli;
use eca::config::Config;
use eca::Error;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "parsed arguments");

    let config = Config::try_from(cli)
        .map_err(Error::from)
        .context("Failed to validate arguments")?;

    eca::run(&config).context("Failed to render automaton")?;

    Ok(())
}
