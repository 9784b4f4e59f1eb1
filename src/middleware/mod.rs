mod auth;
mod session;

pub use auth::{require_auth, decide, GateDecision};
pub use session::{load_state, store_state, current_user, AUTH_FLAG_KEY};
