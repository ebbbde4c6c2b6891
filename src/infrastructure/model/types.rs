//! Model types - Request, Response, and Error types

use crate::types::{ChatMessage, MessageRole};
use reqwest::StatusCode;
use thiserror::Error;

/// Model request for a single chat completion
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Model response from the completion endpoint
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub message: ChatMessage,
}

impl ModelResponse {
    pub fn new(content: String) -> Self {
        Self {
            message: ChatMessage::new(MessageRole::Assistant, content),
        }
    }

    pub fn content(&self) -> &str {
        &self.message.content
    }
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider '{provider}' requires an API key")]
    MissingApiKey { provider: String },
    #[error("provider '{provider}' rejected the API key: {reason}")]
    InvalidApiKey { provider: String, reason: String },
    #[error("failed to build HTTP client for provider '{provider}': {source}")]
    Client {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("network error calling provider '{provider}': {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("provider '{provider}' returned invalid response: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

impl ModelError {
    pub fn missing_api_key(provider: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
        }
    }

    pub fn invalid_api_key(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidApiKey {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    pub fn client(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Client {
            provider: provider.into(),
            source,
        }
    }

    pub fn network(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            provider: provider.into(),
            source,
        }
    }

    pub fn invalid_response(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure means the credential itself is unusable.
    pub fn is_credential_error(&self) -> bool {
        match self {
            ModelError::MissingApiKey { .. } | ModelError::InvalidApiKey { .. } => true,
            ModelError::Network { source, .. } => source.status() == Some(StatusCode::UNAUTHORIZED),
            _ => false,
        }
    }

    /// User-friendly error message in Portuguese
    pub fn user_message(&self) -> String {
        match self {
            ModelError::MissingApiKey { provider } => {
                format!("O provedor '{provider}' exige uma chave de API.")
            }
            ModelError::InvalidApiKey { provider, .. } => {
                format!("A chave de API configurada para '{provider}' é inválida.")
            }
            ModelError::Client { provider, .. } => {
                format!("Não foi possível preparar o cliente HTTP para '{provider}'.")
            }
            ModelError::Network { provider, source } => {
                if source.is_connect() {
                    format!("Não foi possível conectar ao provedor '{provider}'.")
                } else if source.is_timeout() {
                    format!("A requisição para '{provider}' excedeu o tempo limite.")
                } else if let Some(status) = source.status() {
                    match status {
                        StatusCode::UNAUTHORIZED => {
                            format!("O provedor '{provider}' recusou a chave de API.")
                        }
                        StatusCode::TOO_MANY_REQUESTS => {
                            format!("Limite de requisições atingido em '{provider}'. Tente novamente em instantes.")
                        }
                        StatusCode::NOT_FOUND => format!("Endpoint de '{provider}' não encontrado."),
                        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                            format!("O provedor '{provider}' está indisponível no momento.")
                        }
                        _ => format!("A requisição para '{provider}' falhou: {}", status.as_u16()),
                    }
                } else {
                    format!("Erro de rede ao acessar '{provider}'.")
                }
            }
            ModelError::InvalidResponse { provider, .. } => {
                format!("A resposta de '{provider}' não é válida.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_are_flagged() {
        assert!(ModelError::missing_api_key("openai").is_credential_error());
        assert!(ModelError::invalid_api_key("openai", "bad header").is_credential_error());
        assert!(!ModelError::invalid_response("openai", "missing content").is_credential_error());
    }

    #[test]
    fn user_messages_name_the_provider() {
        let message = ModelError::invalid_response("openai", "missing content").user_message();
        assert!(message.contains("openai"));
        assert!(message.contains("não é válida"));

        let message = ModelError::missing_api_key("openai").user_message();
        assert!(message.contains("chave de API"));
    }
}
