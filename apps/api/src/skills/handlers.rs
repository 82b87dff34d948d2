//! Axum route handlers for the skill graph, market insights, mentors and extraction preview.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::agent_client::fallback::DataSource;
use crate::agent_client::WalkerOutcome;
use crate::errors::AppError;
use crate::models::skill::SkillRecord;
use crate::skills::graph::{load_mentors, load_skill_graph, top_demand, MentorList, SkillGraph};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub top_demand: Vec<SkillRecord>,
    pub source: DataSource,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
}

/// GET /api/v1/skills
pub async fn handle_skill_graph(State(state): State<AppState>) -> Json<SkillGraph> {
    Json(load_skill_graph(&state.agent).await)
}

/// GET /api/v1/skills/insights
pub async fn handle_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    let graph = load_skill_graph(&state.agent).await;
    Json(InsightsResponse {
        top_demand: top_demand(&graph.skills),
        source: graph.source,
    })
}

/// GET /api/v1/mentors
pub async fn handle_mentors(State(state): State<AppState>) -> Json<MentorList> {
    Json(load_mentors(&state.agent).await)
}

/// POST /api/v1/skills/extract
///
/// Preview of what the extractor finds in a resume. Does not touch any session.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let text = request.resume_text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    match state.skill_extractor.extract(text).await {
        WalkerOutcome::Ok(skills) => Ok(Json(ExtractResponse { skills })),
        WalkerOutcome::Empty => Ok(Json(ExtractResponse { skills: vec![] })),
        WalkerOutcome::Error(reason) => Err(AppError::Agent(reason)),
    }
}
