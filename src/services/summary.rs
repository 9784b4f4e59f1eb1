//! Figures shown on the protected pages, derived from the ledger and collections.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use crate::models::{
    Plan, PlanTier, Referral, ReferralStatus, TaskStatus, Transaction, TransactionStatus,
    TransactionType, User,
};
use crate::state::AppState;

/// Share of a referral's earnings credited to the referrer.
pub const REFERRAL_COMMISSION: f64 = 0.10;
const RECENT_ACTIVITY: usize = 5;
const PURCHASE_HISTORY: usize = 5;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TaskCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct DashboardSummary {
    pub wallet_balance: f64,
    pub tasks: TaskCounts,
    pub total_referrals: u32,
    pub this_month_earnings: f64,
    pub recent_activity: Vec<Transaction>,
}

#[derive(Debug, Serialize, Clone)]
pub struct EarningsSummary {
    pub current_balance: f64,
    pub total_earnings: f64,
    pub this_month: f64,
    pub last_month: f64,
    pub growth_percent: Option<f64>,
    pub pending_withdrawals: f64,
    pub task_earnings: f64,
    pub referral_bonuses: f64,
    pub total_withdrawn: f64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ReferralSummary {
    pub referral_link: String,
    pub total_referrals: u32,
    pub active_referrals: usize,
    pub referral_earnings: f64,
    pub this_month_bonus: f64,
    pub top_performers: Vec<Referral>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ProfileSummary {
    pub user: User,
    pub member_since: NaiveDate,
    pub current_plan: Option<Plan>,
    pub total_purchases: usize,
    pub purchase_history: Vec<Transaction>,
}

fn earnings_in_month(transactions: &[Transaction], day: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_earning() && t.in_month_of(day))
        .map(|t| t.amount)
        .sum()
}

fn sum_of(transactions: &[Transaction], kind: TransactionType, status: TransactionStatus) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind && t.status == status)
        .map(|t| t.amount)
        .sum()
}

fn previous_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 1 {
        (day.year() - 1, 12)
    } else {
        (day.year(), day.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(day)
}

pub fn task_counts(state: &AppState) -> TaskCounts {
    let count = |status| state.tasks.iter().filter(|t| t.status == status).count();
    TaskCounts {
        completed: count(TaskStatus::Completed),
        in_progress: count(TaskStatus::InProgress),
        pending: count(TaskStatus::Pending),
    }
}

pub fn dashboard(user: &User, state: &AppState, today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        wallet_balance: user.wallet_balance,
        tasks: task_counts(state),
        total_referrals: user.total_referrals,
        this_month_earnings: earnings_in_month(&state.transactions, today),
        recent_activity: state.transactions.iter().take(RECENT_ACTIVITY).cloned().collect(),
    }
}

pub fn earnings(user: &User, state: &AppState, today: NaiveDate) -> EarningsSummary {
    let txs = &state.transactions;
    let this_month = earnings_in_month(txs, today);
    let last_month = earnings_in_month(txs, previous_month(today));
    let growth_percent = (last_month > 0.0).then(|| (this_month - last_month) / last_month * 100.0);

    EarningsSummary {
        current_balance: user.wallet_balance,
        total_earnings: txs.iter().filter(|t| t.is_earning()).map(|t| t.amount).sum(),
        this_month,
        last_month,
        growth_percent,
        pending_withdrawals: state.pending_withdrawals(),
        task_earnings: sum_of(txs, TransactionType::Task, TransactionStatus::Completed),
        referral_bonuses: sum_of(txs, TransactionType::Referral, TransactionStatus::Completed),
        total_withdrawn: sum_of(txs, TransactionType::Withdrawal, TransactionStatus::Completed).abs(),
        transactions: txs.clone(),
    }
}

pub fn referrals(user: &User, state: &AppState, today: NaiveDate) -> ReferralSummary {
    let mut top_performers = state.referrals.clone();
    top_performers.sort_by(|a, b| b.earnings.total_cmp(&a.earnings));

    ReferralSummary {
        referral_link: format!("https://earnhub.com/invite/{}", user.referral_code),
        total_referrals: user.total_referrals,
        active_referrals: state
            .referrals
            .iter()
            .filter(|r| r.status == ReferralStatus::Active)
            .count(),
        referral_earnings: state.referrals.iter().map(|r| r.earnings * REFERRAL_COMMISSION).sum(),
        this_month_bonus: state
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Referral && t.in_month_of(today))
            .map(|t| t.amount)
            .sum(),
        top_performers,
    }
}

pub fn profile(user: &User, state: &AppState) -> ProfileSummary {
    let purchases: Vec<&Transaction> = state
        .transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Recharge)
        .collect();

    ProfileSummary {
        user: user.clone(),
        member_since: user.join_date,
        current_plan: plan_for(&state.plans, user.current_plan),
        total_purchases: purchases.len(),
        purchase_history: purchases.into_iter().take(PURCHASE_HISTORY).cloned().collect(),
    }
}

fn plan_for(plans: &[Plan], tier: PlanTier) -> Option<Plan> {
    plans.iter().find(|p| p.tier == tier).cloned()
}
