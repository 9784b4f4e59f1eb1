mod state_store;
mod login;
pub mod summary;

pub use state_store::StateStore;
pub use login::{LoginService, LoginAttempt};
