//! Skill extraction seam: resume text in, skill names out.
//!
//! Default: `AgentSkillExtractor` (walker `skill_analyzer_agent`).
//! `AppState` holds an `Arc<dyn SkillExtractor>` so tests can swap in a stub.

use async_trait::async_trait;
use serde_json::json;

use crate::agent_client::{AgentClient, WalkerOutcome, SKILL_ANALYZER_WALKER};

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> WalkerOutcome<String>;
}

pub struct AgentSkillExtractor(pub AgentClient);

#[async_trait]
impl SkillExtractor for AgentSkillExtractor {
    async fn extract(&self, resume_text: &str) -> WalkerOutcome<String> {
        self.0
            .call_walker(SKILL_ANALYZER_WALKER, &json!({ "resume_text": resume_text }))
            .await
    }
}

/// Replaces `current` wholesale on a successful extraction, including an
/// empty list.
/// `Empty` and `Error` leave it untouched. Returns whether it changed.
pub fn apply_extraction(current: &mut Vec<String>, outcome: WalkerOutcome<String>) -> bool {
    match outcome {
        WalkerOutcome::Ok(extracted) => {
            *current = extracted;
            true
        }
        WalkerOutcome::Empty | WalkerOutcome::Error(_) => false,
    }
}
