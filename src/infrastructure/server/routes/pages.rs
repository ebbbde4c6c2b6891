//! HTML panel routes.

use super::super::error::PageError;
use super::super::session::{load_state, save_state};
use super::super::state::ServerState;
use super::super::views::IndexTemplate;
use crate::application::handlers::Panel;
use crate::domain::nutrition::MenuSelection;
use crate::model::ModelProvider;
use axum::Form;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{debug, info};

pub const DOWNLOAD_FILE_NAME: &str = "cardapio.txt";

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

impl TabQuery {
    fn panel(&self) -> Panel {
        match self.tab.as_deref() {
            Some("cardapio") => Panel::Menu,
            Some("analise") => Panel::FoodAnalysis,
            _ => Panel::Question,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FoodForm {
    #[serde(default)]
    pub food: String,
}

pub async fn index(Query(query): Query<TabQuery>, session: Session) -> IndexTemplate {
    let state = load_state(&session).await;
    IndexTemplate::new(query.panel(), &MenuSelection::default(), state.last_menu())
}

pub async fn ask<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    session: Session,
    Form(form): Form<QuestionForm>,
) -> IndexTemplate {
    info!("Received question from panel");
    let outcome = state.panels().ask(&form.question).await;
    let stored = load_state(&session).await;
    IndexTemplate::new(Panel::Question, &MenuSelection::default(), stored.last_menu())
        .with_question(form.question, &outcome)
}

pub async fn generate_menu<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    session: Session,
    Form(selection): Form<MenuSelection>,
) -> Result<IndexTemplate, PageError> {
    info!("Received menu generation request from panel");
    let previous = load_state(&session).await;
    let (next, outcome) = state
        .panels()
        .generate_menu(previous.clone(), &selection)
        .await;
    save_state(&session, &previous, &next).await?;
    Ok(IndexTemplate::new(Panel::Menu, &selection, next.last_menu()).with_menu_state(&outcome))
}

pub async fn analyze_food<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    session: Session,
    Form(form): Form<FoodForm>,
) -> IndexTemplate {
    info!("Received food analysis request from panel");
    let outcome = state.panels().analyze_food(&form.food).await;
    let stored = load_state(&session).await;
    IndexTemplate::new(Panel::FoodAnalysis, &MenuSelection::default(), stored.last_menu())
        .with_food(form.food, &outcome)
}

/// Serve the stored menu as a plain-text attachment.
pub async fn download_menu(session: Session) -> Result<impl IntoResponse, PageError> {
    let state = load_state(&session).await;
    let menu = state
        .last_menu()
        .ok_or(PageError::NotFound("Nenhum cardápio gerado nesta sessão."))?
        .to_string();
    debug!(bytes = menu.len(), "Serving menu download");
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        menu,
    ))
}
