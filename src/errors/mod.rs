// Application error type and result alias, built on thiserror.
use thiserror::Error;

pub mod response;
pub mod login;

pub use login::{LoginError, LoginResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Login error: {0}")]
    Login(#[from] LoginError),
}

pub type AppResult<T> = Result<T, AppError>;
