use crate::application::handlers::PanelState;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FoodRequest {
    #[serde(default)]
    pub food: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PanelResponse {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiResult = Result<Json<PanelResponse>, (StatusCode, Json<ErrorResponse>)>;

/// Map a settled panel to an API reply: warnings are 400, upstream failures 502.
pub fn into_api_result(state: PanelState) -> ApiResult {
    match state {
        PanelState::Answered(answer) => Ok(Json(PanelResponse {
            heading: answer.heading,
            content: answer.body,
        })),
        PanelState::Warned(message) => failure(StatusCode::BAD_REQUEST, message),
        PanelState::Failed(message) => failure(StatusCode::BAD_GATEWAY, message),
    }
}

fn failure(status: StatusCode, error: String) -> ApiResult {
    Err((status, Json(ErrorResponse { error })))
}

/// JSON body extractor whose rejections are reported as [`ErrorResponse`].
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let detail = rejection.body_text();
                warn!(status = %rejection.status(), detail = detail.as_str(), "Rejected JSON body");
                Err((
                    rejection.status(),
                    Json(ErrorResponse {
                        error: format!("Requisição inválida: {detail}"),
                    }),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::Answer;

    #[test]
    fn settled_states_map_to_status_codes() {
        let ok = into_api_result(PanelState::Answered(Answer {
            heading: "Resposta do NutriChat:".to_string(),
            body: "Beba água.".to_string(),
        }));
        let Ok(Json(response)) = ok else {
            panic!("answer should be a success");
        };
        assert_eq!(response.content, "Beba água.");

        let warned = into_api_result(PanelState::Warned("vazio".to_string()));
        assert!(matches!(warned, Err((StatusCode::BAD_REQUEST, _))));

        let failed = into_api_result(PanelState::Failed("falhou".to_string()));
        match failed {
            Err((status, Json(body))) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body.error, "falhou");
            }
            Ok(_) => panic!("failure should be an error"),
        }
    }
}
