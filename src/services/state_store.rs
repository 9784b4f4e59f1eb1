use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::state::AppState;

/// Application state per user id, seeded with demo data on first access.
#[derive(Clone, Default)]
pub struct StateStore {
    states: Arc<RwLock<HashMap<String, AppState>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self, user_id: &str) -> AppState {
        if let Some(state) = self.states.read().await.get(user_id) {
            return state.clone();
        }
        self.update(user_id, |state| state.clone()).await
    }

    pub async fn update<F, R>(&self, user_id: &str, f: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let mut states = self.states.write().await;
        let state = states.entry(user_id.to_string()).or_insert_with(|| {
            tracing::debug!("Seeding application state for user {}", user_id);
            AppState::seeded()
        });
        f(state)
    }
}
