// Entry point: parses flags, loads config, and runs the TUI.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use jamaat::app::App;
use jamaat::config::Config;
use jamaat::logging;

#[derive(Parser)]
#[command(name = "jamaat", about = "Prayer times for neighbourhood mosques, in the terminal")]
struct Cli {
    /// Prayer times endpoint (overrides the config file).
    #[arg(long, env = "JAMAAT_ENDPOINT")]
    endpoint: Option<String>,

    /// How often statuses are re-evaluated, in milliseconds.
    #[arg(long)]
    tick_interval_ms: Option<u64>,

    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::open(cli.config.as_deref())?;
    config.apply_overrides(cli.endpoint, cli.tick_interval_ms);
    config.validate().context("Invalid configuration")?;

    logging::init()?;

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
