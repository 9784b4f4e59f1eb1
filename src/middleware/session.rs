use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{mock, User};
use crate::state::SessionState;

/// Flag persisted across reloads while the visitor is signed in.
pub const AUTH_FLAG_KEY: &str = "earnhub_demo_auth";
pub const SESSION_STATE_KEY: &str = "auth_state";

/// Reads the stored state. A missing or unreadable record yields the signed-out
/// default, leaving the auth flag to decide whether the demo user is restored.
pub async fn load_state(session: &Session) -> AppResult<SessionState> {
    let Some(value) = session.get_value(SESSION_STATE_KEY).await? else {
        return Ok(SessionState::default());
    };
    match serde_json::from_value(value) {
        Ok(state) => Ok(state),
        Err(e) => {
            tracing::warn!("Discarding unreadable session state: {}", e);
            Ok(SessionState::default())
        }
    }
}

pub async fn store_state(session: &Session, state: &SessionState) -> AppResult<()> {
    session.insert(SESSION_STATE_KEY, state).await?;
    if state.is_authenticated {
        session.insert(AUTH_FLAG_KEY, true).await?;
    } else {
        session.remove::<bool>(AUTH_FLAG_KEY).await?;
    }
    Ok(())
}

pub async fn current_user(session: &Session) -> AppResult<User> {
    let state = load_state(session).await?;
    match state.user {
        Some(user) if state.is_authenticated => Ok(user),
        _ => Err(AppError::Auth("Not authenticated".into())),
    }
}

/// Signs the demo user back in when only the persisted flag survived.
pub async fn restore_session(session: &Session) -> AppResult<bool> {
    let mut state = load_state(session).await?;
    if state.is_authenticated {
        return Ok(true);
    }

    let flagged = session.get::<bool>(AUTH_FLAG_KEY).await?.unwrap_or(false);
    if flagged {
        tracing::info!("Restoring demo session from persisted flag");
        state.sign_in(mock::mock_user());
        store_state(session, &state).await?;
    }
    Ok(flagged)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tower_sessions::MemoryStore;
    use super::*;

    fn empty_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn flag_alone_restores_the_demo_user() {
        let session = empty_session();
        session.insert(AUTH_FLAG_KEY, true).await.unwrap();

        assert!(restore_session(&session).await.unwrap());

        let state = load_state(&session).await.unwrap();
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(mock::mock_user()));
        assert_eq!(current_user(&session).await.unwrap(), mock::mock_user());
    }

    #[tokio::test]
    async fn flag_survives_an_unreadable_state_record() {
        let session = empty_session();
        session.insert(AUTH_FLAG_KEY, true).await.unwrap();
        session.insert(SESSION_STATE_KEY, "not a session state").await.unwrap();

        assert!(!load_state(&session).await.unwrap().is_authenticated);
        assert!(restore_session(&session).await.unwrap());
        assert_eq!(load_state(&session).await.unwrap().user, Some(mock::mock_user()));
    }

    #[tokio::test]
    async fn no_flag_means_no_restore() {
        let session = empty_session();

        assert!(!restore_session(&session).await.unwrap());
        assert!(load_state(&session).await.unwrap().user.is_none());
        assert!(current_user(&session).await.is_err());
    }

    #[tokio::test]
    async fn signing_out_clears_the_flag() {
        let session = empty_session();
        let mut state = SessionState::default();
        state.sign_in(mock::mock_user());
        store_state(&session, &state).await.unwrap();
        assert_eq!(session.get::<bool>(AUTH_FLAG_KEY).await.unwrap(), Some(true));

        state.sign_out();
        store_state(&session, &state).await.unwrap();
        assert_eq!(session.get::<bool>(AUTH_FLAG_KEY).await.unwrap(), None);
        assert!(!restore_session(&session).await.unwrap());
    }
}
