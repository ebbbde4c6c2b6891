use super::error::ServerError;
use super::routes::{api, blocked, pages};
use super::state::{BlockedState, ServerState};
use super::store::ExpiringMemoryStore;
use crate::model::ModelProvider;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tracing::{error, info, warn};

const SESSION_COOKIE: &str = "nutrichat.sid";

/// Sessions idle for longer than this lose their stored menu.
pub const SESSION_INACTIVITY_SECONDS: i64 = 24 * 60 * 60;

/// Panel pages, menu download and JSON API over one session store.
pub fn build_router<P>(
    state: Arc<ServerState<P>>,
    cors_origins: &[String],
    store: ExpiringMemoryStore,
) -> Router
where
    P: ModelProvider + 'static,
{
    let api_routes = Router::new()
        .route("/api/dicas", post(api::ask_handler::<P>))
        .route("/api/cardapio", post(api::menu_handler::<P>))
        .route("/api/analise", post(api::analysis_handler::<P>))
        .route("/api-doc/openapi.json", get(api::openapi_handler))
        .layer(cors_layer(cors_origins));

    let sessions = SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            SESSION_INACTIVITY_SECONDS,
        )))
        .with_secure(false)
        .with_http_only(true);

    Router::new()
        .route("/", get(pages::index))
        .route("/dicas", post(pages::ask::<P>))
        .route("/cardapio", post(pages::generate_menu::<P>))
        .route("/cardapio/download", get(pages::download_menu))
        .route("/analise", post(pages::analyze_food::<P>))
        .merge(api_routes)
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router used when no usable credential is configured: every path gets the diagnostic.
pub fn build_blocked_router(state: BlockedState) -> Router {
    Router::new()
        .fallback(blocked::blocked_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(origin = origin.as_str(), %err, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub(super) async fn serve_router(router: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!(%addr, "Binding HTTP server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "HTTP server ready to accept connections");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(%err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
