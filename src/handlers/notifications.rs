use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use serde_json::json;
use tower_sessions::Session;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::middleware::current_user;
use super::layout::shell;

pub async fn list_notifications(
    State(ctx): State<AppContext>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    let notifications = ctx.store.snapshot(&user.id).await.notifications;
    Ok(shell(&ctx, user, "notifications", notifications).await)
}

pub async fn mark_notification_read(
    State(ctx): State<AppContext>,
    session: Session,
    Path(notification_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    let (updated, unread) = ctx
        .store
        .update(&user.id, |state| {
            (state.mark_notification_read(&notification_id), state.unread_count())
        })
        .await;

    Ok(Json(json!({ "updated": updated, "unread": unread })))
}

pub async fn mark_all_read(
    State(ctx): State<AppContext>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    let unread = ctx
        .store
        .update(&user.id, |state| {
            state.mark_all_read();
            state.unread_count()
        })
        .await;

    tracing::debug!("All notifications read for user {}", user.id);
    Ok(Json(json!({ "unread": unread })))
}
