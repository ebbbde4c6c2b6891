use super::super::state::BlockedState;
use super::super::views::BlockedTemplate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::warn;

/// Every route answers with the credential diagnostic while blocked.
pub async fn blocked_handler(State(state): State<Arc<BlockedState>>) -> impl IntoResponse {
    warn!(
        env_var = state.api_key_env.as_str(),
        "Request refused, API credential is not configured"
    );
    (
        StatusCode::SERVICE_UNAVAILABLE,
        BlockedTemplate {
            api_key_env: state.api_key_env.clone(),
            reason: state.reason.clone(),
        },
    )
}
