use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::middleware::current_user;
use crate::services::summary;
use super::layout::{shell, today};

pub async fn serve_referrals(
    State(ctx): State<AppContext>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    let state = ctx.store.snapshot(&user.id).await;
    let view = summary::referrals(&user, &state, today());
    Ok(shell(&ctx, user, "referrals", view).await)
}
