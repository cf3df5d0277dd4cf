//! WIR CLI - Command line tool for querying the weather summary service.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wir-cli",
    version,
    about = "Will It Rain On My Parade? weather summary toolkit"
)]
struct Cli {
    /// Path to YAML config. Search order if not given:
    /// $WIR_CONFIG, ./config/wir.yaml, ./config.yaml, ~/.config/will-it-rain/config.yaml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Weather service base URL (overrides the config file)
    #[arg(long, global = true, env = "WIR_SERVICE_BASE_URL")]
    service_base_url: Option<String>,

    #[command(subcommand)]
    command: wir_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = wir_cmd::config::load_config(cli.config, cli.service_base_url)?;
    log::debug!("Weather service: {}", config.service_base_url);
    wir_cmd::run(cli.command, config).await
}
