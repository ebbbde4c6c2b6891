use crate::model::{ModelError, ModelProvider, ModelRequest};
use crate::types::Prompt;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub default_model: String,
}

impl ClientConfig {
    pub fn new(default_model: impl Into<String>) -> Self {
        Self {
            default_model: default_model.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ChatError {
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Model(err) => err.user_message(),
        }
    }

    pub fn is_credential_error(&self) -> bool {
        match self {
            ChatError::Model(err) => err.is_credential_error(),
        }
    }
}

/// Stateless completion client: every call sends exactly one system and one user message.
pub struct CompletionClient<P: ModelProvider> {
    provider: P,
    config: ClientConfig,
}

impl<P: ModelProvider> CompletionClient<P> {
    pub fn new(provider: P, config: ClientConfig) -> Self {
        Self { provider, config }
    }

    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Complete `prompt` with the configured default model.
    pub async fn ask(&self, prompt: Prompt) -> Result<String, ChatError> {
        self.send(prompt, &self.config.default_model).await
    }

    pub async fn complete(
        &self,
        system_text: &str,
        user_text: &str,
        model: &str,
    ) -> Result<String, ChatError> {
        self.send(Prompt::new(system_text, user_text), model).await
    }

    async fn send(&self, prompt: Prompt, model: &str) -> Result<String, ChatError> {
        debug!(
            provider = self.provider.id(),
            model,
            user_chars = prompt.user.chars().count(),
            "Dispatching completion request"
        );
        let request = ModelRequest {
            model: model.to_string(),
            messages: prompt.into_messages(),
        };

        let response = self.provider.chat(request).await?;
        info!(
            provider = self.provider.id(),
            model,
            response_chars = response.content().chars().count(),
            "Completion received"
        );

        Ok(response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelResponse;
    use crate::types::MessageRole;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct EchoProvider {
        seen: Mutex<Vec<ModelRequest>>,
    }

    #[async_trait]
    impl ModelProvider for EchoProvider {
        fn id(&self) -> &str {
            "echo"
        }

        async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
            let reply = format!("{}:{}", request.model, request.messages[1].content);
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(request);
            }
            Ok(ModelResponse::new(reply))
        }
    }

    #[tokio::test]
    async fn complete_uses_explicit_model() {
        let client = CompletionClient::new(EchoProvider::default(), ClientConfig::new("gpt-4o-mini"));
        let reply = client
            .complete("Você é um nutricionista profissional.", "Oi", "gpt-4o")
            .await
            .expect("reply");
        assert_eq!(reply, "gpt-4o:Oi");
        assert_eq!(client.provider_id(), "echo");
    }

    #[tokio::test]
    async fn ask_uses_default_model_and_orders_messages() {
        let client = CompletionClient::new(EchoProvider::default(), ClientConfig::new("gpt-4o-mini"));
        let reply = client
            .ask(Prompt::new("sistema", "pergunta"))
            .await
            .expect("reply");
        assert_eq!(reply, "gpt-4o-mini:pergunta");
        assert_eq!(client.default_model(), "gpt-4o-mini");

        let seen = client.provider.seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages[0].role, MessageRole::System);
        assert_eq!(seen[0].messages[0].content, "sistema");
        assert_eq!(seen[0].messages[1].role, MessageRole::User);
    }
}
