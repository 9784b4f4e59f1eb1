use serde::{Deserialize, Serialize};
use super::task::TaskStatus;

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskStatusForm {
    pub status: TaskStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawMethod {
    #[default]
    Bank,
    Card,
    Wallet,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawForm {
    pub amount: f64,
    #[serde(default)]
    pub method: WithdrawMethod,
}

// Query string carried back to the public pages
#[derive(Debug, Deserialize, Default)]
pub struct PageMessage {
    pub error: Option<String>,
    pub message: Option<String>,
}
