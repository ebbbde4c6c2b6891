use clap::Parser;
use nutrichat::{AppConfig, Cli};
use std::error::Error;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    nutrichat::init_tracing();
    debug!(config = ?cli.config, addr = ?cli.addr, model = ?cli.model, "CLI arguments parsed");

    let config = AppConfig::load(cli.config.as_deref())?
        .with_model(cli.model)
        .with_bind(cli.addr);
    match &cli.config {
        Some(path) => info!(path = %path.display(), "Loaded configuration from file"),
        None => info!("Loaded configuration using default path or defaults"),
    }

    nutrichat::run(config).await?;
    info!("NutriChat stopped");
    Ok(())
}
