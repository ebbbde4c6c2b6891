//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for chat-completion backends
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Identifier used in logs and error messages
    fn id(&self) -> &str;

    /// Send one chat request and wait for the completion
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}

#[async_trait]
impl<P: ModelProvider + ?Sized> ModelProvider for Arc<P> {
    fn id(&self) -> &str {
        (**self).id()
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        (**self).chat(request).await
    }
}
