use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Basic,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub tier: PlanTier,
    pub display_name: String,
    pub price: f64,
    pub features: Vec<String>,
    pub task_limit: Option<u32>,  // None means unlimited
    pub earning_potential: f64,
    #[serde(default)]
    pub popular: bool,
}
