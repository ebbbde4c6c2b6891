mod docs;
mod dto;
mod error;
mod markdown;
mod router;
mod routes;
mod session;
mod state;
mod store;
mod views;

pub use error::{PageError, ServerError};
pub use router::{SESSION_INACTIVITY_SECONDS, build_blocked_router, build_router};
pub use state::{BlockedState, ServerState};
pub use store::ExpiringMemoryStore;

use crate::application::handlers::Panels;
use crate::model::ModelProvider;
use std::net::SocketAddr;
use std::time::Duration;
use tower_sessions::session_store::ExpiredDeletion;

const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

pub async fn serve<P>(
    panels: Panels<P>,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    let state = std::sync::Arc::new(ServerState::new(panels));
    let store = ExpiringMemoryStore::default();
    let sweeper = tokio::spawn(
        store
            .clone()
            .continuously_delete_expired(SESSION_SWEEP_PERIOD),
    );

    let result = router::serve_router(build_router(state, cors_origins, store), addr).await;
    sweeper.abort();
    result
}

/// Serve only the credential diagnostic; no panel is reachable.
pub async fn serve_blocked(state: BlockedState, addr: SocketAddr) -> Result<(), ServerError> {
    router::serve_router(build_blocked_router(state), addr).await
}
