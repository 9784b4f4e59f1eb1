pub mod config;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use context::AppContext;
pub use router::build_router;
