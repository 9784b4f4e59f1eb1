use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

// Task status, ordered by progress
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// A status may only move forward: pending, then in progress, then completed.
    pub fn can_advance_to(self, next: TaskStatus) -> bool {
        next > self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Daily,
    Weekly,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskIcon {
    #[default]
    CheckSquare,
    Play,
    MessageSquare,
    Smartphone,
    Database,
    Globe,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: TaskIcon,
    pub reward: f64,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub deadline: Option<NaiveDate>,
    pub category: String,
}

// Tabs on the tasks page
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Daily,
    Weekly,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Daily => task.task_type == TaskType::Daily,
            TaskFilter::Weekly => task.task_type == TaskType::Weekly,
            TaskFilter::Completed => task.status == TaskStatus::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_moves_forward() {
        assert!(TaskStatus::Pending.can_advance_to(TaskStatus::InProgress));
        assert!(TaskStatus::Pending.can_advance_to(TaskStatus::Completed));
        assert!(TaskStatus::InProgress.can_advance_to(TaskStatus::Completed));
        assert!(!TaskStatus::Completed.can_advance_to(TaskStatus::Pending));
        assert!(!TaskStatus::InProgress.can_advance_to(TaskStatus::Pending));
        assert!(!TaskStatus::Completed.can_advance_to(TaskStatus::Completed));
    }

    #[test]
    fn icon_names_are_a_closed_set() {
        let icon: TaskIcon = serde_json::from_str("\"Smartphone\"").unwrap();
        assert_eq!(icon, TaskIcon::Smartphone);
        assert!(serde_json::from_str::<TaskIcon>("\"Rocket\"").is_err());
        assert_eq!(TaskIcon::default(), TaskIcon::CheckSquare);
    }

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"in_progress\"");
    }
}
