use super::dto::{ErrorResponse, FoodRequest, PanelResponse, QuestionRequest};
use super::routes;
use crate::domain::nutrition::{DietaryPreference, DietaryRestriction, Goal, MenuSelection};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::ask_handler,
        routes::api::menu_handler,
        routes::api::analysis_handler
    ),
    components(
        schemas(
            QuestionRequest,
            FoodRequest,
            MenuSelection,
            Goal,
            DietaryPreference,
            DietaryRestriction,
            PanelResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "dicas", description = "Perguntas livres sobre nutrição"),
        (name = "cardapio", description = "Geração de cardápio de um dia"),
        (name = "analise", description = "Análise nutricional de um alimento")
    )
)]
pub(super) struct ApiDoc;
