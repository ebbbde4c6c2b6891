pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_API_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_CONFIG_PATH: &str = "config/nutrichat.toml";
pub const ENV_PATH: &str = "config/.env";
