use chrono::NaiveDate;
use serde::Serialize;
use crate::errors::{AppError, AppResult};
use crate::models::{
    mock, Notification, Plan, Referral, Task, TaskFilter, TaskStatus, Transaction,
    TransactionStatus, TransactionType, WithdrawMethod,
};

/// In-memory collections behind the protected pages.
#[derive(Debug, Serialize, Clone)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub plans: Vec<Plan>,
    pub transactions: Vec<Transaction>,
    pub referrals: Vec<Referral>,
    pub notifications: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AppState {
    /// State populated with the demo data.
    pub fn seeded() -> Self {
        Self {
            tasks: mock::tasks(),
            plans: mock::plans(),
            transactions: mock::transactions(),
            referrals: mock::referrals(),
            notifications: mock::notifications(),
            loading: false,
            error: None,
        }
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Returns whether a task changed. Unknown ids and backwards moves are ignored.
    pub fn set_task_status(&mut self, task_id: &str, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            tracing::debug!("No task {} to update", task_id);
            return false;
        };

        if !task.status.can_advance_to(status) {
            tracing::warn!(
                "Ignoring status change of task {} from {:?} to {:?}",
                task_id, task.status, status
            );
            return false;
        }

        task.status = status;
        true
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    pub fn mark_notification_read(&mut self, notification_id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == notification_id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.notifications.iter_mut().for_each(|n| n.read = true);
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn filter_tasks(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Marks the task completed and credits its reward to the ledger.
    pub fn complete_task(&mut self, task_id: &str, today: NaiveDate) -> Option<Transaction> {
        let (title, reward) = self
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .map(|t| (t.title.clone(), t.reward))?;

        if !self.set_task_status(task_id, TaskStatus::Completed) {
            return None;
        }

        let transaction = Transaction::new(
            TransactionType::Task,
            reward,
            TransactionStatus::Completed,
            today,
            format!("{} completed", title),
        );
        self.add_transaction(transaction.clone());
        Some(transaction)
    }

    /// Total of withdrawal requests not yet settled, as a positive amount.
    pub fn pending_withdrawals(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Withdrawal && t.status == TransactionStatus::Pending)
            .map(|t| -t.amount)
            .sum()
    }

    /// Records a pending withdrawal request. No money moves.
    pub fn request_withdrawal(
        &mut self,
        amount: f64,
        method: WithdrawMethod,
        balance: f64,
        today: NaiveDate,
    ) -> AppResult<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::Validation("Withdrawal amount must be positive".into()));
        }
        // Requests still pending already hold part of the balance
        let available = balance - self.pending_withdrawals();
        if amount > available {
            return Err(AppError::Validation(format!(
                "Withdrawal of {:.2} exceeds available balance of {:.2}",
                amount, available.max(0.0)
            )));
        }

        let description = match method {
            WithdrawMethod::Bank => "Bank transfer withdrawal",
            WithdrawMethod::Card => "Debit card withdrawal",
            WithdrawMethod::Wallet => "Digital wallet withdrawal",
        };
        let transaction = Transaction::new(
            TransactionType::Withdrawal,
            -amount,
            TransactionStatus::Pending,
            today,
            description,
        );
        self.add_transaction(transaction.clone());
        Ok(transaction)
    }
}
