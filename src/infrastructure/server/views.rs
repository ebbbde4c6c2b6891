//! Askama views for the panel page and the blocked-mode diagnostic.

use super::markdown::render_markdown;
use crate::application::handlers::{MENU_HEADING, Panel, PanelState};
use crate::domain::nutrition::{DietaryPreference, DietaryRestriction, Goal, MenuSelection};
use askama::Template;
use askama_web::WebTemplate;

pub const DOWNLOAD_LABEL: &str = "Salvar como TXT";

/// What a panel shows below its form.
#[derive(Debug, Clone, Default)]
pub struct PanelView {
    pub warning: Option<String>,
    pub error: Option<String>,
    pub heading: Option<String>,
    pub body_html: Option<String>,
}

impl PanelView {
    pub fn from_state(state: &PanelState) -> Self {
        match state {
            PanelState::Warned(message) => Self {
                warning: Some(message.clone()),
                ..Self::default()
            },
            PanelState::Failed(message) => Self {
                error: Some(message.clone()),
                ..Self::default()
            },
            PanelState::Answered(answer) => Self {
                heading: Some(answer.heading.clone()),
                body_html: Some(render_markdown(&answer.body)),
                ..Self::default()
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub label: &'static str,
    pub selected: bool,
}

fn options<T: Copy + PartialEq>(
    all: &[T],
    current: T,
    label: fn(T) -> &'static str,
) -> Vec<SelectOption> {
    all.iter()
        .map(|&item| SelectOption {
            label: label(item),
            selected: item == current,
        })
        .collect()
}

/// The tabbed page with all three panels.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub active_tab: &'static str,
    pub question: String,
    pub question_view: PanelView,
    pub goal_options: Vec<SelectOption>,
    pub preference_options: Vec<SelectOption>,
    pub restriction_options: Vec<SelectOption>,
    pub menu_view: PanelView,
    pub menu_heading: &'static str,
    pub stored_menu_html: Option<String>,
    pub download_label: &'static str,
    pub food: String,
    pub analysis_view: PanelView,
}

impl IndexTemplate {
    pub fn new(active: Panel, selection: &MenuSelection, stored_menu: Option<&str>) -> Self {
        Self {
            active_tab: active.as_str(),
            question: String::new(),
            question_view: PanelView::default(),
            goal_options: options(&Goal::ALL, selection.goal, Goal::label),
            preference_options: options(
                &DietaryPreference::ALL,
                selection.preference,
                DietaryPreference::label,
            ),
            restriction_options: options(
                &DietaryRestriction::ALL,
                selection.restriction,
                DietaryRestriction::label,
            ),
            menu_view: PanelView::default(),
            menu_heading: MENU_HEADING,
            stored_menu_html: stored_menu.map(render_markdown),
            download_label: DOWNLOAD_LABEL,
            food: String::new(),
            analysis_view: PanelView::default(),
        }
    }

    pub fn with_question(mut self, question: String, state: &PanelState) -> Self {
        self.question = question;
        self.question_view = PanelView::from_state(state);
        self
    }

    /// Menu answers are shown from the session store, so only warnings and errors are kept here.
    pub fn with_menu_state(mut self, state: &PanelState) -> Self {
        let mut view = PanelView::from_state(state);
        view.heading = None;
        view.body_html = None;
        self.menu_view = view;
        self
    }

    pub fn with_food(mut self, food: String, state: &PanelState) -> Self {
        self.food = food;
        self.analysis_view = PanelView::from_state(state);
        self
    }
}

/// Shown on every route when the server starts without a usable credential.
#[derive(Template, WebTemplate)]
#[template(path = "blocked.html")]
pub struct BlockedTemplate {
    pub api_key_env: String,
    pub reason: String,
}
