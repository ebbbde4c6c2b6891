use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nutrichat",
    version,
    about = "NutriChat: assistente nutricional com painéis web sobre um endpoint de chat compatível com OpenAI"
)]
pub struct Cli {
    /// Settings file (defaults to config/nutrichat.toml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Bind address, overrides `bind` from the settings file
    #[arg(long)]
    pub addr: Option<SocketAddr>,
    /// Model identifier, overrides `model` from the settings file
    #[arg(long)]
    pub model: Option<String>,
}
