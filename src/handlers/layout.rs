use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use serde_json::json;
use crate::context::AppContext;
use crate::models::User;

/// Protected pages are wrapped in the app layout: header user, notification badge, page view.
#[derive(Serialize)]
pub struct LayoutShell<T> {
    pub layout: &'static str,
    pub page: &'static str,
    pub user: User,
    pub unread_notifications: usize,
    pub view: T,
}

pub async fn shell<T: Serialize>(
    ctx: &AppContext,
    user: User,
    page: &'static str,
    view: T,
) -> Json<LayoutShell<T>> {
    let unread_notifications = ctx.store.snapshot(&user.id).await.unread_count();
    Json(LayoutShell {
        layout: "app",
        page,
        user,
        unread_notifications,
        view,
    })
}

pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("No page at {}", uri.path()) })),
    )
}
