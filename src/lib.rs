pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{client, handlers, prompts, session};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use domain::types;
pub use infrastructure::{model, server};

use application::client::{ClientConfig, CompletionClient};
use application::handlers::Panels;
use model::OpenAIClient;
use server::{BlockedState, ServerError};
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Start the HTTP server: the panels when the credential is usable, the diagnostic otherwise.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    debug!(
        model = config.model.as_str(),
        endpoint = config.endpoint.as_str(),
        bind = %config.bind,
        "Configuration resolved"
    );

    match OpenAIClient::from_config(&config) {
        Ok(provider) => {
            let client = CompletionClient::new(provider, ClientConfig::new(config.model.clone()));
            info!(
                addr = %config.bind,
                provider = client.provider_id(),
                model = client.default_model(),
                "Starting NutriChat"
            );
            let panels = Panels::new(Arc::new(client));
            server::serve(panels, config.bind, &config.cors_origins).await
        }
        Err(err) => {
            error!(
                error = %err,
                env_var = config.api_key_env.as_str(),
                "API credential missing or rejected, serving diagnostic only"
            );
            let state = BlockedState {
                api_key_env: config.api_key_env.clone(),
                reason: err.user_message(),
            };
            server::serve_blocked(state, config.bind).await
        }
    }
}

/// Install the fmt subscriber. `.env` files are loaded first so `RUST_LOG` set there applies.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        config::ensure_env_loaded();
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
