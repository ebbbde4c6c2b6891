use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Errors returned by page handlers.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("not found: {0}")]
    NotFound(&'static str),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Session(err) => {
                tracing::error!(error = %err, "Session store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno ao acessar a sessão.",
                )
                    .into_response()
            }
            PageError::NotFound(what) => (StatusCode::NOT_FOUND, what).into_response(),
        }
    }
}
