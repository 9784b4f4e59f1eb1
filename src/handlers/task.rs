use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_sessions::Session;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::middleware::current_user;
use crate::models::{Task, TaskFilter, TaskStatusForm};
use crate::services::summary::{self, TaskCounts};
use super::layout::{shell, today};

#[derive(Debug, Deserialize, Default)]
pub struct TaskQuery {
    #[serde(default)]
    pub filter: TaskFilter,
}

#[derive(Serialize)]
struct TasksView {
    tasks: Vec<Task>,
    counts: TaskCounts,
}

pub async fn list_tasks(
    State(ctx): State<AppContext>,
    session: Session,
    Query(query): Query<TaskQuery>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;
    tracing::debug!("Listing tasks for user {} with filter {:?}", user.id, query.filter);

    let state = ctx.store.snapshot(&user.id).await;
    let view = TasksView {
        tasks: state.filter_tasks(query.filter),
        counts: summary::task_counts(&state),
    };
    Ok(shell(&ctx, user, "tasks", view).await)
}

pub async fn set_task_status(
    State(ctx): State<AppContext>,
    session: Session,
    Path(task_id): Path<String>,
    Json(form): Json<TaskStatusForm>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;

    let (updated, task) = ctx
        .store
        .update(&user.id, |state| {
            let updated = state.set_task_status(&task_id, form.status);
            (updated, state.tasks.iter().find(|t| t.id == task_id).cloned())
        })
        .await;

    if updated {
        tracing::info!("Task {} moved to {:?} for user {}", task_id, form.status, user.id);
    }
    Ok(Json(json!({ "updated": updated, "task": task })))
}

pub async fn complete_task(
    State(ctx): State<AppContext>,
    session: Session,
    Path(task_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&session).await?;

    let transaction = ctx
        .store
        .update(&user.id, |state| state.complete_task(&task_id, today()))
        .await;

    match &transaction {
        Some(tx) => tracing::info!("Task {} completed by user {}, credited {:.2}", task_id, user.id, tx.amount),
        None => tracing::warn!("Task {} could not be completed for user {}", task_id, user.id),
    }
    Ok(Json(json!({ "completed": transaction.is_some(), "transaction": transaction })))
}
