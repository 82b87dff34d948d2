use std::sync::Arc;

use crate::agent_client::AgentClient;
use crate::profile::store::SessionStore;
use crate::skills::extraction::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub agent: AgentClient,
    pub sessions: SessionStore,
    /// Pluggable skill extractor. Default: AgentSkillExtractor.
    pub skill_extractor: Arc<dyn SkillExtractor>,
}
