//! Interaction handlers for the three panels.
//!
//! A panel is idle until a submission arrives. A submission whose required
//! input is present dispatches one completion call and waits for it; the
//! private `Waiting` value only exists for that call and is consumed when
//! the panel settles as [`PanelState::Answered`] or [`PanelState::Failed`].
//! A submission with missing input never waits: it ends as
//! [`PanelState::Warned`] and no request is sent.

use crate::application::client::{ChatError, CompletionClient};
use crate::application::prompts::{food_analysis_prompt, menu_prompt, question_prompt};
use crate::application::session::SessionState;
use crate::application::text::title_case;
use crate::domain::nutrition::MenuSelection;
use crate::model::ModelProvider;
use crate::types::Prompt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const ANSWER_HEADING: &str = "Resposta do NutriChat:";
pub const MENU_HEADING: &str = "Sugestão de Cardápio para um dia:";
pub const ANALYSIS_HEADING_PREFIX: &str = "Análise do Alimento: ";

pub const EMPTY_QUESTION_WARNING: &str = "Por favor, digite uma pergunta.";
pub const EMPTY_FOOD_WARNING: &str = "Por favor, digite o nome de um alimento para analisar.";

/// Which panel an interaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Question,
    Menu,
    FoodAnalysis,
}

impl Panel {
    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Question => "dicas",
            Panel::Menu => "cardapio",
            Panel::FoodAnalysis => "analise",
        }
    }

    fn error_prefix(self) -> &'static str {
        match self {
            Panel::Question => "Ocorreu um erro ao processar sua pergunta",
            Panel::Menu => "Ocorreu um erro ao gerar o cardápio",
            Panel::FoodAnalysis => "Ocorreu um erro ao processar sua análise",
        }
    }
}

/// Generated text together with the heading it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub heading: String,
    pub body: String,
}

/// Outcome of one panel submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Warned(String),
    Answered(Answer),
    Failed(String),
}

impl PanelState {
    pub fn answer(&self) -> Option<&Answer> {
        match self {
            PanelState::Answered(answer) => Some(answer),
            _ => None,
        }
    }
}

/// A panel with a completion call in flight.
struct Waiting {
    panel: Panel,
    heading: String,
}

impl Waiting {
    fn begin(panel: Panel, heading: String) -> Self {
        debug!(panel = panel.as_str(), "Panel waiting for completion");
        Self { panel, heading }
    }

    fn settle(self, result: Result<String, ChatError>) -> PanelState {
        let panel = self.panel;
        match result {
            Ok(body) => {
                info!(panel = panel.as_str(), "Panel settled with an answer");
                PanelState::Answered(Answer {
                    heading: self.heading,
                    body,
                })
            }
            Err(err) => {
                if err.is_credential_error() {
                    error!(provider_error = %err, "Completion endpoint rejected the API credential");
                }
                error!(panel = panel.as_str(), error = %err, "Panel settled with an error");
                PanelState::Failed(format!("{}: {}", panel.error_prefix(), err.user_message()))
            }
        }
    }
}

/// Runs the panel flows against a completion client.
pub struct Panels<P: ModelProvider> {
    client: Arc<CompletionClient<P>>,
}

impl<P: ModelProvider> Clone for Panels<P> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<P: ModelProvider> Panels<P> {
    pub fn new(client: Arc<CompletionClient<P>>) -> Self {
        Self { client }
    }

    /// Free-text nutrition question.
    pub async fn ask(&self, question: &str) -> PanelState {
        if question.trim().is_empty() {
            warn!(panel = Panel::Question.as_str(), "Empty question, nothing sent");
            return PanelState::Warned(EMPTY_QUESTION_WARNING.to_string());
        }
        self.run(Panel::Question, ANSWER_HEADING.to_string(), question_prompt(question))
            .await
    }

    /// One-day menu for `selection`.
    ///
    /// The session is taken by value and handed back; it only changes when the
    /// generation succeeds.
    pub async fn generate_menu(
        &self,
        mut session: SessionState,
        selection: &MenuSelection,
    ) -> (SessionState, PanelState) {
        debug!(
            goal = selection.goal.label(),
            preference = selection.preference.label(),
            restriction = selection.restriction.label(),
            "Generating menu"
        );
        let state = self
            .run(Panel::Menu, MENU_HEADING.to_string(), menu_prompt(selection))
            .await;
        if let PanelState::Answered(answer) = &state {
            session.store_menu(answer.body.clone());
        }
        (session, state)
    }

    /// Nutritional analysis of a named food.
    pub async fn analyze_food(&self, food: &str) -> PanelState {
        let food = food.trim();
        if food.is_empty() {
            warn!(panel = Panel::FoodAnalysis.as_str(), "Empty food name, nothing sent");
            return PanelState::Warned(EMPTY_FOOD_WARNING.to_string());
        }
        let heading = format!("{ANALYSIS_HEADING_PREFIX}{}", title_case(food));
        self.run(Panel::FoodAnalysis, heading, food_analysis_prompt(food))
            .await
    }

    async fn run(&self, panel: Panel, heading: String, prompt: Prompt) -> PanelState {
        let waiting = Waiting::begin(panel, heading);
        let result = self.client.ask(prompt).await;
        waiting.settle(result)
    }
}
