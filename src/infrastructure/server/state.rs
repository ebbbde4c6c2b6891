use crate::application::handlers::Panels;
use crate::model::ModelProvider;

pub struct ServerState<P: ModelProvider> {
    panels: Panels<P>,
}

impl<P: ModelProvider> ServerState<P> {
    pub fn new(panels: Panels<P>) -> Self {
        Self { panels }
    }

    pub(crate) fn panels(&self) -> &Panels<P> {
        &self.panels
    }
}

/// State of a server started without a usable credential.
#[derive(Debug, Clone)]
pub struct BlockedState {
    pub api_key_env: String,
    pub reason: String,
}
