use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::middleware::{load_state, store_state};
use crate::models::{PageMessage, SignInForm, SignUpForm};
use super::templates::render;

const MIN_PASSWORD_LEN: usize = 6;

pub async fn serve_landing(State(ctx): State<AppContext>) -> AppResult<Response> {
    Ok(render(&ctx.config, "landing.html", &[]).await?.into_response())
}

pub async fn serve_signin_page(
    State(ctx): State<AppContext>,
    Query(page): Query<PageMessage>,
) -> AppResult<Response> {
    let html = render(
        &ctx.config,
        "signin.html",
        &[
            ("error", page.error.as_deref().unwrap_or("")),
            ("message", page.message.as_deref().unwrap_or("")),
            ("demo_email", ctx.config.auth.demo_email.as_str()),
        ],
    )
    .await?;
    Ok(html.into_response())
}

#[axum::debug_handler]
pub async fn handle_signin(
    State(ctx): State<AppContext>,
    session: Session,
    Form(form): Form<SignInForm>,
) -> AppResult<Response> {
    tracing::info!("Sign-in attempt for: {}", form.email);

    // Kept in memory only: a dropped request must not leave `loading` stored
    let mut state = load_state(&session).await?;
    state.login_start();

    // Dropping the handler future cancels the attempt
    let attempt = ctx.login.start(form.email.clone(), form.password);
    match attempt.outcome().await {
        Ok(user) => {
            tracing::info!("Signed in {} as user {}", form.email, user.id);
            state.sign_in(user);
            store_state(&session, &state).await?;
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(e) => {
            state.login_failure(e.to_string());
            store_state(&session, &state).await?;
            Err(AppError::Login(e))
        }
    }
}

pub async fn serve_signup_page(
    State(ctx): State<AppContext>,
    Query(page): Query<PageMessage>,
) -> AppResult<Response> {
    let html = render(
        &ctx.config,
        "signup.html",
        &[("error", page.error.as_deref().unwrap_or(""))],
    )
    .await?;
    Ok(html.into_response())
}

fn validate_signup(form: &SignUpForm, demo_email: &str) -> Result<(), &'static str> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() || form.phone.trim().is_empty() {
        return Err("All fields are required");
    }
    if !form.email.contains('@') {
        return Err("Please enter a valid email address");
    }
    if form.password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    if form.password != form.confirm_password {
        return Err("Passwords don't match");
    }
    if form.email.eq_ignore_ascii_case(demo_email) {
        return Err("Email already registered");
    }
    Ok(())
}

// Registration is simulated: the form is validated but no account is created
pub async fn handle_signup(
    State(ctx): State<AppContext>,
    Form(form): Form<SignUpForm>,
) -> Response {
    if let Err(msg) = validate_signup(&form, &ctx.config.auth.demo_email) {
        tracing::info!("Sign-up rejected for {}: {}", form.email, msg);
        return Redirect::to(&format!("/signup?error={}", urlencoding::encode(msg))).into_response();
    }

    tracing::info!("Sign-up received for {} ({})", form.name, form.email);
    let message = "Registration received. Sign in with the demo account to explore";
    Redirect::to(&format!("/signin?message={}", urlencoding::encode(message))).into_response()
}

pub async fn handle_signout(session: Session) -> AppResult<Response> {
    let mut state = load_state(&session).await?;
    if let Some(user) = &state.user {
        tracing::info!("Signing out user {}", user.id);
    }
    state.sign_out();
    store_state(&session, &state).await?;
    Ok(Redirect::to("/").into_response())
}
