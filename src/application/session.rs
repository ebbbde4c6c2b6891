use serde::{Deserialize, Serialize};

/// Per-session state carried between requests.
///
/// Holds at most one generated menu; a new successful generation replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_menu: Option<String>,
}

impl SessionState {
    pub fn with_menu(menu: impl Into<String>) -> Self {
        Self {
            last_menu: Some(menu.into()),
        }
    }

    pub fn last_menu(&self) -> Option<&str> {
        self.last_menu.as_deref().filter(|menu| !menu.is_empty())
    }

    pub fn store_menu(&mut self, menu: String) {
        self.last_menu = Some(menu);
    }
}
