use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde_json::json;
use tower_sessions::Session;
use crate::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::middleware::{current_user, load_state, store_state};
use crate::models::{PasswordForm, UserUpdate};
use crate::services::summary;
use super::layout::{shell, today};

pub async fn serve_dashboard(
    State(ctx): State<AppContext>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    tracing::info!("Accessing dashboard for user {}", user.id);

    let state = ctx.store.snapshot(&user.id).await;
    let view = summary::dashboard(&user, &state, today());
    Ok(shell(&ctx, user, "dashboard", view).await)
}

pub async fn serve_profile(
    State(ctx): State<AppContext>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    let state = ctx.store.snapshot(&user.id).await;
    let view = summary::profile(&user, &state);
    Ok(shell(&ctx, user, "profile", view).await)
}

pub async fn update_profile(
    session: Session,
    Json(update): Json<UserUpdate>,
) -> AppResult<impl IntoResponse> {
    let mut state = load_state(&session).await?;
    if !state.is_authenticated {
        return Err(AppError::Auth("Not authenticated".into()));
    }

    tracing::debug!("Profile update: {:?}", update);
    state.update_user(update);
    store_state(&session, &state).await?;
    Ok(Json(state.user))
}

// Demo accounts keep their password; the form is only validated
pub async fn change_password(
    session: Session,
    Json(form): Json<PasswordForm>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;

    if form.current_password.is_empty() {
        return Err(AppError::Validation("Current password is required".into()));
    }
    if form.new_password.len() < 6 {
        return Err(AppError::Validation("New password must be at least 6 characters".into()));
    }
    if form.new_password != form.confirm_password {
        return Err(AppError::Validation("Passwords don't match".into()));
    }

    tracing::info!("Password change accepted for user {} (not persisted)", user.id);
    Ok(Json(json!({ "message": "Password change accepted" })))
}
