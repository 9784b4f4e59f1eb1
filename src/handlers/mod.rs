mod templates;
mod layout;
mod auth;
mod dashboard;
mod task;
mod earnings;
mod referrals;
mod notifications;
mod plans;

pub use auth::{serve_landing, serve_signin_page, handle_signin, serve_signup_page, handle_signup, handle_signout};
pub use dashboard::{serve_dashboard, serve_profile, update_profile, change_password};
pub use task::{list_tasks, set_task_status, complete_task};
pub use earnings::{serve_earnings, request_withdrawal};
pub use referrals::serve_referrals;
pub use notifications::{list_notifications, mark_notification_read, mark_all_read};
pub use plans::list_plans;
pub use layout::not_found;
