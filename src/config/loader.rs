use super::AppConfig;
use super::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_API_PATH, DEFAULT_BIND, DEFAULT_CONFIG_PATH, DEFAULT_ENDPOINT,
    DEFAULT_MODEL, ENV_PATH,
};
use super::error::ConfigError;
use dotenvy::{dotenv, from_filename};
use secrecy::SecretString;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub bind: Option<String>,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    pub api_key_env: Option<String>,
}

/// Ensures environment variables are loaded from config/.env, then ./.env.
///
/// Variables already present in the process environment are never overridden.
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        load_env_file(Path::new(ENV_PATH));
        if let Ok(path) = dotenv() {
            debug!(path = %path.display(), "Loaded environment file");
        }
    });
}

/// Load one `.env` file into the process environment; false when it is absent or unreadable.
fn load_env_file(path: &Path) -> bool {
    match from_filename(path) {
        Ok(_) => {
            debug!(path = %path.display(), "Loaded environment file");
            true
        }
        Err(_) => false,
    }
}

/// Load configuration from the process environment and an optional settings file
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    load_with_env(path, |key| env::var(key).ok())
}

/// Load configuration resolving environment variables through `lookup`.
///
/// An explicit `path` must exist; the default path is optional.
pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = match path {
        Some(path) => read_config(path)?,
        None => match read_config(Path::new(DEFAULT_CONFIG_PATH)) {
            Ok(raw) => raw,
            Err(ConfigError::NotFound { .. }) => {
                debug!(
                    path = DEFAULT_CONFIG_PATH,
                    "No settings file found, using defaults"
                );
                RawConfig::default()
            }
            Err(err) => return Err(err),
        },
    };

    validate_and_build(raw, lookup)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading settings file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build<F>(raw: RawConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let model = non_empty("model", raw.model, DEFAULT_MODEL)?;
    let endpoint = non_empty("endpoint", raw.endpoint, DEFAULT_ENDPOINT)?;
    let api_path = non_empty("api_path", raw.api_path, DEFAULT_API_PATH)?;
    let api_key_env = non_empty("api_key_env", raw.api_key_env, DEFAULT_API_KEY_ENV)?;

    let bind_value = raw.bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
    let bind: SocketAddr = bind_value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBind {
            value: bind_value.clone(),
            source,
        })?;

    let api_key = lookup(&api_key_env)
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from);
    if api_key.is_none() {
        warn!(env_var = api_key_env.as_str(), "API key environment variable is not set");
    }

    Ok(AppConfig {
        api_key,
        api_key_env,
        model,
        endpoint,
        api_path,
        bind,
        cors_origins: raw.cors_origins,
    })
}

fn non_empty(
    field: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyField { field }),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default.to_string()),
    }
}
