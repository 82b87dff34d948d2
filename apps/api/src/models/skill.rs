use serde::{Deserialize, Serialize};

/// A skill-graph node as returned by the `get_skill_graph` walker. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub category: String,
    /// 0 – 10
    pub difficulty: f64,
    /// 0.0 – 1.0
    #[serde(default)]
    pub market_demand: f64,
}

/// A mentor suggestion as returned by the `mentor_match_agent` walker. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorRecord {
    pub mentor_name: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    pub score: f64,
    #[serde(default)]
    pub overlap: u32,
    /// 0.0 – 5.0
    #[serde(default)]
    pub rating: f64,
    /// percent of time, 0 – 100
    #[serde(default)]
    pub availability: f64,
}
