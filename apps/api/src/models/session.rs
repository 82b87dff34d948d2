use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_LEARNING_STYLE: &str = "balanced";
pub const DEFAULT_SKILLS: &[&str] = &["Python", "SQL"];

/// Caller-owned context for one dashboard user: who they are, which career
/// they target and which skills they claim. Passed explicitly into analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    pub learning_style: String,
    pub target_career: Option<String>,
    pub skills: Vec<String>,
    pub connected_mentors: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            learning_style: DEFAULT_LEARNING_STYLE.to_string(),
            target_career: None,
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            connected_mentors: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
