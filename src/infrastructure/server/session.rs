//! Loading and saving [`SessionState`] through `tower-sessions`.

use crate::application::session::SessionState;
use tower_sessions::Session;
use tracing::warn;

const SESSION_STATE_KEY: &str = "nutrichat.state";

/// Read the session state, falling back to an empty state when absent or unreadable.
pub(crate) async fn load_state(session: &Session) -> SessionState {
    match session.get::<SessionState>(SESSION_STATE_KEY).await {
        Ok(state) => state.unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "Failed to read session state, starting empty");
            SessionState::default()
        }
    }
}

/// Persist `next` when it differs from `previous`.
pub(crate) async fn save_state(
    session: &Session,
    previous: &SessionState,
    next: &SessionState,
) -> Result<(), tower_sessions::session::Error> {
    if previous == next {
        return Ok(());
    }
    session.insert(SESSION_STATE_KEY, next).await
}
