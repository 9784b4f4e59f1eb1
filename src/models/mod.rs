mod user;
mod forms;
mod task;
mod transaction;
mod referral;
mod notification;
mod plan;
pub mod mock;

pub use user::{User, UserUpdate};
pub use forms::{SignInForm, SignUpForm, PasswordForm, TaskStatusForm, WithdrawForm, WithdrawMethod, PageMessage};
pub use task::{Task, TaskStatus, TaskType, TaskIcon, TaskFilter};
pub use transaction::{Transaction, TransactionType, TransactionStatus};
pub use referral::{Referral, ReferralStatus};
pub use notification::{Notification, NotificationKind};
pub use plan::{Plan, PlanTier};
