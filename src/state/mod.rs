mod session;
mod app;

pub use session::SessionState;
pub use app::AppState;
