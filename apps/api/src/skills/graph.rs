//! Skill graph and mentor loading with explicit fallback selection.

use serde::Serialize;
use serde_json::json;

use crate::agent_client::fallback::{self, select_or_fallback, DataSource};
use crate::agent_client::{AgentClient, MENTOR_MATCH_WALKER, SKILL_GRAPH_WALKER};
use crate::models::skill::{MentorRecord, SkillRecord};

const TOP_DEMAND_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct SkillGraph {
    pub skills: Vec<SkillRecord>,
    pub source: DataSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentorList {
    pub mentors: Vec<MentorRecord>,
    pub source: DataSource,
}

pub async fn load_skill_graph(agent: &AgentClient) -> SkillGraph {
    let outcome = agent.call_walker(SKILL_GRAPH_WALKER, &json!({})).await;
    let (skills, source) = select_or_fallback(SKILL_GRAPH_WALKER, outcome, fallback::skill_graph);
    SkillGraph { skills, source }
}

pub async fn load_mentors(agent: &AgentClient) -> MentorList {
    let outcome = agent.call_walker(MENTOR_MATCH_WALKER, &json!({})).await;
    let (mentors, source) = select_or_fallback(MENTOR_MATCH_WALKER, outcome, fallback::mentors);
    MentorList { mentors, source }
}

/// Skills with the highest market demand, descending. Ties keep input order.
pub fn top_demand(skills: &[SkillRecord]) -> Vec<SkillRecord> {
    let mut sorted = skills.to_vec();
    sorted.sort_by(|a, b| b.market_demand.total_cmp(&a.market_demand));
    sorted.truncate(TOP_DEMAND_COUNT);
    sorted
}
