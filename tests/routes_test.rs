use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use earnhub::{build_router, config::Config, AppContext};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let mut config = Config::load().expect("config/default.toml");
    config.auth.login_delay_ms = 10;
    config.auth.bcrypt_cost = 4;
    build_router(AppContext::new(config).expect("demo credentials hash"))
}

async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, cookie: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(resp: &Response<Body>) -> &str {
    resp.headers()[header::LOCATION].to_str().unwrap()
}

fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

async fn json_body(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn sign_in(app: &Router, email: &str, password: &str) -> (Response<Body>, Option<String>) {
    let form = format!(
        "email={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    );
    let req = Request::builder()
        .method("POST")
        .uri("/signin")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    let resp = send(app, req).await;
    let cookie = session_cookie(&resp);
    (resp, cookie)
}

async fn demo_session(app: &Router) -> String {
    let (resp, cookie) = sign_in(app, "demo@earnhub.com", "demo123").await;
    assert_eq!(location(&resp), "/dashboard");
    cookie.expect("sign-in sets the session cookie")
}

#[tokio::test]
async fn dashboard_redirects_to_signin_when_signed_out() {
    let app = test_app();

    for path in ["/dashboard", "/tasks", "/earnings", "/referrals", "/somewhere/else"] {
        let resp = send(&app, get(path, None)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(location(&resp), "/signin");
    }
}

#[tokio::test]
async fn public_pages_render_without_a_session() {
    let app = test_app();

    let landing = send(&app, get("/", None)).await;
    assert_eq!(landing.status(), StatusCode::OK);

    let signin = send(&app, get("/signin?error=%3Cbad%3E", None)).await;
    assert_eq!(signin.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(signin.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("&lt;bad&gt;"));

    let plans = json_body(send(&app, get("/plans", None)).await).await;
    assert_eq!(plans.as_array().unwrap().len(), 3);
    assert_eq!(plans[2]["task_limit"], Value::Null);
}

#[tokio::test]
async fn demo_credentials_open_the_protected_layout() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let resp = send(&app, get("/dashboard", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["layout"], "app");
    assert_eq!(body["page"], "dashboard");
    assert_eq!(body["user"]["name"], "John Smith");
    assert_eq!(body["unread_notifications"], 2);
    assert_eq!(body["view"]["tasks"]["completed"], 2);
}

#[tokio::test]
async fn wrong_credentials_stay_signed_out() {
    let app = test_app();
    let (resp, cookie) = sign_in(&app, "demo@earnhub.com", "nope").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin?error=Invalid%20email%20or%20password");

    let cookie = cookie.expect("failed sign-in still records the error in the session");
    let resp = send(&app, get("/dashboard", Some(&cookie))).await;
    assert_eq!(location(&resp), "/signin");
}

#[tokio::test]
async fn signed_in_visitors_skip_signin_and_get_404_for_unknown_pages() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let resp = send(&app, get("/signin", Some(&cookie))).await;
    assert_eq!(location(&resp), "/dashboard");

    let resp = send(&app, get("/nowhere", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sign_out_closes_the_gate() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let resp = send(&app, get("/signout", Some(&cookie))).await;
    assert_eq!(location(&resp), "/");

    let resp = send(&app, get("/dashboard", Some(&cookie))).await;
    assert_eq!(location(&resp), "/signin");
}

#[tokio::test]
async fn completing_a_task_credits_the_ledger() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let body = json_body(send(&app, post_json("/tasks/4/complete", &cookie, json!({}))).await).await;
    assert_eq!(body["completed"], true);
    assert_eq!(body["transaction"]["amount"], 35.0);
    assert_eq!(body["transaction"]["type"], "task");

    let earnings = json_body(send(&app, get("/earnings", Some(&cookie))).await).await;
    let transactions = earnings["view"]["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 6);
    assert_eq!(transactions[0]["description"], "Online Shopping Data Entry completed");

    let again = json_body(send(&app, post_json("/tasks/4/complete", &cookie, json!({}))).await).await;
    assert_eq!(again["completed"], false);
}

#[tokio::test]
async fn task_status_updates_ignore_unknown_ids_and_regressions() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let body = json_body(
        send(&app, post_json("/tasks/1/status", &cookie, json!({ "status": "in_progress" }))).await,
    )
    .await;
    assert_eq!(body["updated"], true);
    assert_eq!(body["task"]["status"], "in_progress");

    let body = json_body(
        send(&app, post_json("/tasks/99/status", &cookie, json!({ "status": "completed" }))).await,
    )
    .await;
    assert_eq!(body["updated"], false);

    let body = json_body(
        send(&app, post_json("/tasks/2/status", &cookie, json!({ "status": "pending" }))).await,
    )
    .await;
    assert_eq!(body["updated"], false);
    assert_eq!(body["task"]["status"], "completed");

    let weekly = json_body(send(&app, get("/tasks?filter=weekly", Some(&cookie))).await).await;
    assert_eq!(weekly["view"]["tasks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn notifications_can_be_marked_read() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let body = json_body(send(&app, post_json("/notifications/1/read", &cookie, json!({}))).await).await;
    assert_eq!(body["updated"], true);
    assert_eq!(body["unread"], 1);

    for _ in 0..2 {
        let body = json_body(send(&app, post_json("/notifications/read-all", &cookie, json!({}))).await).await;
        assert_eq!(body["unread"], 0);
    }
}

#[tokio::test]
async fn withdrawals_are_validated_against_the_balance() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let resp = send(&app, post_json("/earnings/withdraw", &cookie, json!({ "amount": 5000.0 }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(
        &app,
        post_json("/earnings/withdraw", &cookie, json!({ "amount": 1600.0, "method": "card" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tx = json_body(resp).await;
    assert_eq!(tx["amount"], -1600.0);
    assert_eq!(tx["status"], "pending");
    assert_eq!(tx["description"], "Debit card withdrawal");

    // 1847.50 balance, 1800 now pending: a second request over 47.50 is refused
    let resp = send(&app, post_json("/earnings/withdraw", &cookie, json!({ "amount": 100.0 }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let earnings = json_body(send(&app, get("/earnings", Some(&cookie))).await).await;
    assert_eq!(earnings["view"]["pending_withdrawals"], 1800.0);
}

#[tokio::test]
async fn profile_updates_merge_into_the_session_user() {
    let app = test_app();
    let cookie = demo_session(&app).await;

    let resp = send(&app, post_json("/profile", &cookie, json!({ "phone": "+1 555 0199" }))).await;
    let user = json_body(resp).await;
    assert_eq!(user["phone"], "+1 555 0199");
    assert_eq!(user["name"], "John Smith");

    let profile = json_body(send(&app, get("/profile", Some(&cookie))).await).await;
    assert_eq!(profile["user"]["phone"], "+1 555 0199");
    assert_eq!(profile["view"]["total_purchases"], 1);

    let resp = send(
        &app,
        post_json(
            "/profile/password",
            &cookie,
            json!({ "current_password": "demo123", "new_password": "secret1", "confirm_password": "secret2" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
