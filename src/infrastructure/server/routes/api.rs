use super::super::docs::ApiDoc;
use super::super::dto::{
    ApiJson, ApiResult, ErrorResponse, FoodRequest, PanelResponse, QuestionRequest,
    into_api_result,
};
use super::super::session::{load_state, save_state};
use super::super::state::ServerState;
use crate::domain::nutrition::MenuSelection;
use crate::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/api/dicas",
    tag = "dicas",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Pergunta respondida", body = PanelResponse),
        (status = 400, description = "Pergunta vazia", body = ErrorResponse),
        (status = 502, description = "Falha no provedor de IA", body = ErrorResponse)
    )
)]
pub async fn ask_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    ApiJson(payload): ApiJson<QuestionRequest>,
) -> ApiResult {
    info!("Received /api/dicas request");
    into_api_result(state.panels().ask(&payload.question).await)
}

#[utoipa::path(
    post,
    path = "/api/cardapio",
    tag = "cardapio",
    request_body = MenuSelection,
    responses(
        (status = 200, description = "Cardápio gerado e guardado na sessão", body = PanelResponse),
        (status = 502, description = "Falha no provedor de IA", body = ErrorResponse)
    )
)]
pub async fn menu_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    session: Session,
    ApiJson(selection): ApiJson<MenuSelection>,
) -> ApiResult {
    info!("Received /api/cardapio request");
    let previous = load_state(&session).await;
    let (next, outcome) = state
        .panels()
        .generate_menu(previous.clone(), &selection)
        .await;
    if let Err(err) = save_state(&session, &previous, &next).await {
        error!(error = %err, "Failed to persist generated menu");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "não foi possível guardar o cardápio na sessão".to_string(),
            }),
        ));
    }
    into_api_result(outcome)
}

#[utoipa::path(
    post,
    path = "/api/analise",
    tag = "analise",
    request_body = FoodRequest,
    responses(
        (status = 200, description = "Alimento analisado", body = PanelResponse),
        (status = 400, description = "Nome do alimento vazio", body = ErrorResponse),
        (status = 502, description = "Falha no provedor de IA", body = ErrorResponse)
    )
)]
pub async fn analysis_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    ApiJson(payload): ApiJson<FoodRequest>,
) -> ApiResult {
    info!("Received /api/analise request");
    into_api_result(state.panels().analyze_food(&payload.food).await)
}

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
