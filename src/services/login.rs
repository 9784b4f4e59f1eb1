use std::sync::Arc;
use std::time::Duration;
use bcrypt::{hash, verify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use crate::config::AuthConfig;
use crate::errors::{LoginError, LoginResult};
use crate::models::{mock, User};

struct DemoCredentials {
    email: String,
    password_hash: String,
    delay: Duration,
}

impl DemoCredentials {
    fn check(&self, email: &str, password: &str) -> LoginResult<User> {
        if email != self.email {
            tracing::info!("Sign-in rejected for unknown email: {}", email);
            return Err(LoginError::InvalidCredentials);
        }
        if !verify(password, &self.password_hash)? {
            tracing::info!("Sign-in rejected, wrong password for: {}", email);
            return Err(LoginError::InvalidCredentials);
        }
        Ok(mock::mock_user())
    }
}

/// Simulated sign-in backend: checks the demo pair after a fixed delay.
#[derive(Clone)]
pub struct LoginService {
    credentials: Arc<DemoCredentials>,
}

impl LoginService {
    pub fn new(config: &AuthConfig) -> LoginResult<Self> {
        let password_hash = hash(config.demo_password.as_bytes(), config.bcrypt_cost)?;
        Ok(Self {
            credentials: Arc::new(DemoCredentials {
                email: config.demo_email.clone(),
                password_hash,
                delay: Duration::from_millis(config.login_delay_ms),
            }),
        })
    }

    pub fn start(&self, email: String, password: String) -> LoginAttempt {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let credentials = self.credentials.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::debug!("Sign-in for {} cancelled during delay", email);
                    return Err(LoginError::Cancelled);
                }
                _ = tokio::time::sleep(credentials.delay) => {}
            }

            match tokio::task::spawn_blocking(move || credentials.check(&email, &password)).await {
                Ok(result) => result,
                Err(e) => Err(LoginError::Join(e)),
            }
        });

        LoginAttempt { handle, token }
    }
}

/// In-flight sign-in. Dropping it cancels the attempt.
pub struct LoginAttempt {
    handle: JoinHandle<LoginResult<User>>,
    token: CancellationToken,
}

impl LoginAttempt {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub async fn outcome(mut self) -> LoginResult<User> {
        (&mut self.handle).await?
    }
}

impl Drop for LoginAttempt {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
