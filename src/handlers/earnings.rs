use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::middleware::current_user;
use crate::models::WithdrawForm;
use crate::services::summary;
use super::layout::{shell, today};

pub async fn serve_earnings(
    State(ctx): State<AppContext>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    let state = ctx.store.snapshot(&user.id).await;
    let view = summary::earnings(&user, &state, today());
    Ok(shell(&ctx, user, "earnings", view).await)
}

pub async fn request_withdrawal(
    State(ctx): State<AppContext>,
    session: Session,
    Json(form): Json<WithdrawForm>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    tracing::info!("Withdrawal request of {:.2} via {:?} by user {}", form.amount, form.method, user.id);

    let transaction = ctx
        .store
        .update(&user.id, |state| {
            let result = state.request_withdrawal(form.amount, form.method, user.wallet_balance, today());
            state.set_error(result.as_ref().err().map(|e| e.to_string()));
            result
        })
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
