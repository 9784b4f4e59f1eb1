use serde::{Deserialize, Serialize};
use crate::models::{User, UserUpdate};

/// Who is signed in for one browser session.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn login_start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn sign_in(&mut self, user: User) {
        self.loading = false;
        self.is_authenticated = true;
        self.user = Some(user);
        self.error = None;
    }

    pub fn login_failure(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.is_authenticated = false;
        self.user = None;
        self.error = Some(message.into());
    }

    pub fn sign_out(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        self.error = None;
    }

    // No-op while signed out
    pub fn update_user(&mut self, update: UserUpdate) {
        if let Some(user) = self.user.as_mut() {
            user.apply(update);
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
