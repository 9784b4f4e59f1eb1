use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use super::plan::PlanTier;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub wallet_balance: f64,
    pub current_plan: PlanTier,
    pub referral_code: String,
    pub total_referrals: u32,
    pub join_date: NaiveDate,
}

// Partial user record, only the present fields are merged
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub wallet_balance: Option<f64>,
    pub current_plan: Option<PlanTier>,
}

impl User {
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
        if let Some(balance) = update.wallet_balance {
            self.wallet_balance = balance;
        }
        if let Some(plan) = update.current_plan {
            self.current_plan = plan;
        }
    }
}
