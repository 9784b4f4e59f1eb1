use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Task,
    Referral,
    Withdrawal,
    Recharge,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Ledger entry. Credits carry a positive amount, debits a negative one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub status: TransactionStatus,
    pub date: NaiveDate,
    pub description: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionType,
        amount: f64,
        status: TransactionStatus,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            amount,
            status,
            date,
            description: description.into(),
        }
    }

    /// Money earned rather than moved: positive and not a withdrawal.
    pub fn is_earning(&self) -> bool {
        self.kind != TransactionType::Withdrawal && self.amount > 0.0
    }

    pub fn in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }
}
