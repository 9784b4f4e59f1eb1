use axum::{
    routing::{get, post},
    Router,
    middleware::from_fn,
};
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::{context::AppContext, handlers, middleware};

pub const SESSION_COOKIE: &str = "earnhub_session";

pub fn build_router(ctx: AppContext) -> Router {
    // Session store lives as long as the router
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name(SESSION_COOKIE);

    let static_dir = ctx.config.server.static_dir.clone();
    let max_body_bytes = ctx.config.limits.max_body_bytes;

    Router::new()
        // Public routes
        .route("/", get(handlers::serve_landing))
        .route("/signin", get(handlers::serve_signin_page).post(handlers::handle_signin))
        .route("/signup", get(handlers::serve_signup_page).post(handlers::handle_signup))
        .route("/plans", get(handlers::list_plans))
        .nest_service("/static", ServeDir::new(static_dir))

        // Protected routes
        .route("/signout", get(handlers::handle_signout))
        .route("/dashboard", get(handlers::serve_dashboard))
        .route("/tasks", get(handlers::list_tasks))
        .route("/tasks/:task_id/status", post(handlers::set_task_status))
        .route("/tasks/:task_id/complete", post(handlers::complete_task))
        .route("/earnings", get(handlers::serve_earnings))
        .route("/earnings/withdraw", post(handlers::request_withdrawal))
        .route("/referrals", get(handlers::serve_referrals))
        .route("/profile", get(handlers::serve_profile).post(handlers::update_profile))
        .route("/profile/password", post(handlers::change_password))
        .route("/notifications", get(handlers::list_notifications))
        .route("/notifications/read-all", post(handlers::mark_all_read))
        .route("/notifications/:notification_id/read", post(handlers::mark_notification_read))
        .fallback(handlers::not_found)

        // Gate runs inside the session layer
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
