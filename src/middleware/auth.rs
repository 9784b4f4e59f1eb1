use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
};
use tower_sessions::Session;
use super::session::restore_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

pub fn is_public(path: &str) -> bool {
    matches!(path, "/" | "/signin" | "/signup" | "/plans") || path.starts_with("/static/")
}

pub fn decide(path: &str, authenticated: bool) -> GateDecision {
    if authenticated {
        match path {
            "/signin" | "/signup" => GateDecision::Redirect("/dashboard"),
            _ => GateDecision::Allow,
        }
    } else if is_public(path) {
        GateDecision::Allow
    } else {
        GateDecision::Redirect("/signin")
    }
}

pub async fn require_auth(
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    let authenticated = match restore_session(&session).await {
        Ok(authenticated) => authenticated,
        Err(e) => return e.into_response(),
    };

    match decide(req.uri().path(), authenticated) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Redirect(target) => {
            tracing::debug!("Gate redirects {} to {}", req.uri().path(), target);
            Redirect::to(target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_pages_are_always_reachable() {
        for path in ["/", "/plans", "/static/style.css"] {
            assert_eq!(decide(path, false), GateDecision::Allow);
            assert_eq!(decide(path, true), GateDecision::Allow);
        }
        assert_eq!(decide("/signin", false), GateDecision::Allow);
    }

    #[test]
    fn signed_out_visitors_go_to_signin() {
        for path in ["/dashboard", "/tasks", "/earnings", "/referrals", "/nowhere"] {
            assert_eq!(decide(path, false), GateDecision::Redirect("/signin"));
        }
    }

    #[test]
    fn signed_in_visitors_skip_the_auth_pages() {
        assert_eq!(decide("/signin", true), GateDecision::Redirect("/dashboard"));
        assert_eq!(decide("/signup", true), GateDecision::Redirect("/dashboard"));
        assert_eq!(decide("/dashboard", true), GateDecision::Allow);
    }
}
