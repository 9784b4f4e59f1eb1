use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Login attempt was cancelled")]
    Cancelled,

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Login task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type LoginResult<T> = Result<T, LoginError>;
