use axum::response::Json;
use crate::models::{mock, Plan};

pub async fn list_plans() -> Json<Vec<Plan>> {
    Json(mock::plans())
}
