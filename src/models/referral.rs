use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Active,
    Inactive,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Referral {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub earnings: f64,
    pub status: ReferralStatus,
    pub level: u8,
}
