use super::error::ConfigError;
use secrecy::SecretString;
use std::net::SocketAddr;
use std::path::Path;

/// Application configuration: credential from the environment, settings from TOML
#[derive(Debug)]
pub struct AppConfig {
    /// `None` when the variable named by `api_key_env` is unset or blank
    pub api_key: Option<SecretString>,
    pub api_key_env: String,
    pub model: String,
    pub endpoint: String,
    pub api_path: String,
    pub bind: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Load configuration with a custom environment lookup
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        super::loader::load_with_env(path, lookup)
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }

    pub fn with_bind(mut self, bind: Option<SocketAddr>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        self
    }
}
