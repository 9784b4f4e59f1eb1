use axum::{
    response::{IntoResponse, Response, Redirect},
    http::StatusCode,
    Json,
};
use serde_json::json;
use crate::errors::{AppError, LoginError};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors go back to the sign-in page
            AppError::Auth(msg) => signin_redirect(&msg),

            AppError::Session(e) => {
                tracing::error!("Session store failure: {}", e);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, format!("Session error: {}", e))
            }

            AppError::File(e) => {
                tracing::error!("File failure: {}", e);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, format!("File error: {}", e))
            }

            AppError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, msg),

            AppError::Login(err) => convert_login_error(err),
        }
    }
}

fn convert_login_error(err: LoginError) -> Response {
    match err {
        LoginError::InvalidCredentials => signin_redirect(&err.to_string()),

        LoginError::Cancelled => error_body(
            StatusCode::SERVICE_UNAVAILABLE,
            "Sign-in was cancelled, please try again".to_string(),
        ),

        _ => {
            tracing::error!("Login failure: {}", err);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, format!("Login error: {}", err))
        }
    }
}

fn signin_redirect(msg: &str) -> Response {
    Redirect::to(&format!("/signin?error={}", urlencoding::encode(msg))).into_response()
}

fn error_body(status: StatusCode, msg: String) -> Response {
    (status, Json(json!({ "error": msg }))).into_response()
}
