//! Demo data the application state is seeded with.

use chrono::NaiveDate;
use super::{
    Notification, NotificationKind, Plan, PlanTier, Referral, ReferralStatus, Task, TaskIcon,
    TaskStatus, TaskType, Transaction, TransactionStatus, TransactionType, User,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_user() -> User {
    User {
        id: "1".into(),
        name: "John Smith".into(),
        email: "john.smith@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2".into(),
        wallet_balance: 1847.50,
        current_plan: PlanTier::Medium,
        referral_code: "JOH123456".into(),
        total_referrals: 12,
        join_date: day(2024, 1, 15),
    }
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "1".into(),
            tier: PlanTier::Basic,
            display_name: "Basic Plan".into(),
            price: 29.0,
            features: strings(&[
                "Up to 20 tasks per month",
                "Basic earning potential",
                "Email support",
                "Standard withdrawal processing",
            ]),
            task_limit: Some(20),
            earning_potential: 500.0,
            popular: false,
        },
        Plan {
            id: "2".into(),
            tier: PlanTier::Medium,
            display_name: "Medium Plan".into(),
            price: 59.0,
            features: strings(&[
                "Up to 50 tasks per month",
                "Enhanced earning potential",
                "Priority support",
                "Faster withdrawal processing",
                "Bonus tasks access",
            ]),
            task_limit: Some(50),
            earning_potential: 1200.0,
            popular: true,
        },
        Plan {
            id: "3".into(),
            tier: PlanTier::High,
            display_name: "High Plan".into(),
            price: 99.0,
            features: strings(&[
                "Unlimited tasks per month",
                "Maximum earning potential",
                "Premium support",
                "Instant withdrawal processing",
                "Exclusive high-value tasks",
                "Referral bonus multiplier",
            ]),
            task_limit: None,
            earning_potential: 3000.0,
            popular: false,
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".into(),
            title: "Complete Social Media Survey".into(),
            description: "Answer questions about your social media habits and preferences.".into(),
            icon: TaskIcon::MessageSquare,
            reward: 25.0,
            task_type: TaskType::Daily,
            status: TaskStatus::Pending,
            deadline: Some(day(2024, 12, 31)),
            category: "Survey".into(),
        },
        Task {
            id: "2".into(),
            title: "Watch Product Demo Video".into(),
            description: "Watch a 5-minute product demonstration and provide feedback.".into(),
            icon: TaskIcon::Play,
            reward: 15.0,
            task_type: TaskType::Daily,
            status: TaskStatus::Completed,
            deadline: None,
            category: "Video".into(),
        },
        Task {
            id: "3".into(),
            title: "App Testing & Review".into(),
            description: "Test a mobile app for 10 minutes and write a detailed review.".into(),
            icon: TaskIcon::Smartphone,
            reward: 50.0,
            task_type: TaskType::Weekly,
            status: TaskStatus::InProgress,
            deadline: Some(day(2024, 12, 28)),
            category: "Testing".into(),
        },
        Task {
            id: "4".into(),
            title: "Online Shopping Data Entry".into(),
            description: "Enter product information from provided images into spreadsheet.".into(),
            icon: TaskIcon::Database,
            reward: 35.0,
            task_type: TaskType::Daily,
            status: TaskStatus::Pending,
            deadline: None,
            category: "Data Entry".into(),
        },
        Task {
            id: "5".into(),
            title: "Website Usability Test".into(),
            description: "Navigate through a website and report any usability issues.".into(),
            icon: TaskIcon::Globe,
            reward: 40.0,
            task_type: TaskType::Weekly,
            status: TaskStatus::Completed,
            deadline: None,
            category: "Testing".into(),
        },
    ]
}

fn transaction(
    id: &str,
    kind: TransactionType,
    amount: f64,
    status: TransactionStatus,
    date: NaiveDate,
    description: &str,
) -> Transaction {
    Transaction {
        id: id.into(),
        kind,
        amount,
        status,
        date,
        description: description.into(),
    }
}

pub fn transactions() -> Vec<Transaction> {
    use TransactionStatus as S;
    use TransactionType as K;

    vec![
        transaction("1", K::Task, 25.0, S::Completed, day(2024, 12, 20), "Social Media Survey completed"),
        transaction("2", K::Referral, 50.0, S::Completed, day(2024, 12, 19), "Referral bonus - Sarah Johnson"),
        transaction("3", K::Withdrawal, -200.0, S::Pending, day(2024, 12, 18), "Bank transfer withdrawal"),
        transaction("4", K::Task, 15.0, S::Completed, day(2024, 12, 17), "Product demo video watched"),
        transaction("5", K::Recharge, 59.99, S::Completed, day(2024, 12, 15), "Medium plan purchase"),
    ]
}

pub fn referrals() -> Vec<Referral> {
    let referral = |id: &str, name: &str, email: &str, joined: NaiveDate, earnings: f64, status| Referral {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        join_date: joined,
        earnings,
        status,
        level: 1,
    };

    vec![
        referral("1", "Sarah Johnson", "sarah.j@example.com", day(2024, 12, 15), 250.0, ReferralStatus::Active),
        referral("2", "Mike Chen", "mike.chen@example.com", day(2024, 12, 10), 180.0, ReferralStatus::Active),
        referral("3", "Emma Davis", "emma.d@example.com", day(2024, 12, 8), 320.0, ReferralStatus::Active),
        referral("4", "Alex Wilson", "alex.w@example.com", day(2024, 12, 5), 95.0, ReferralStatus::Inactive),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let notification = |id: &str, title: &str, message: &str, kind, read, date| Notification {
        id: id.into(),
        title: title.into(),
        message: message.into(),
        kind,
        read,
        date,
    };

    vec![
        notification(
            "1",
            "Task Completed",
            "Your social media survey has been approved. $25 added to wallet.",
            NotificationKind::Success,
            false,
            day(2024, 12, 20),
        ),
        notification(
            "2",
            "New Referral",
            "Sarah Johnson joined using your referral code. Bonus incoming!",
            NotificationKind::Info,
            false,
            day(2024, 12, 19),
        ),
        notification(
            "3",
            "Withdrawal Pending",
            "Your withdrawal request of $200 is being processed.",
            NotificationKind::Warning,
            true,
            day(2024, 12, 18),
        ),
        notification(
            "4",
            "Plan Expiry Reminder",
            "Your Medium plan expires in 5 days. Consider upgrading!",
            NotificationKind::Info,
            true,
            day(2024, 12, 16),
        ),
    ]
}
