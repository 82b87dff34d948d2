use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::agent_client::WalkerOutcome;
use crate::errors::AppError;
use crate::models::session::Session;
use crate::readiness::learning_path::generate_path;
use crate::readiness::report::{analyze, ReadinessReport};
use crate::skills::extraction::apply_extraction;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub learning_style: Option<String>,
    pub target_career: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetCareerRequest {
    pub career: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub learning_style: String,
    pub target_career: String,
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub session: Session,
    /// False when no resume was given or extraction failed / came back empty.
    pub skills_updated: bool,
    pub readiness: ReadinessReport,
}

#[derive(Debug, Serialize)]
pub struct CareerAnalysisResponse {
    pub session: Session,
    pub readiness: ReadinessReport,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub career: String,
    pub learning_path: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConnectMentorResponse {
    pub connected_mentors: Vec<String>,
    pub already_connected: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let name = non_blank(&req.name, "name")?;

    let mut session = Session::new(name);
    if let Some(style) = req.learning_style.as_deref().map(str::trim) {
        if !style.is_empty() {
            session.learning_style = style.to_string();
        }
    }
    session.target_career = req
        .target_career
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let session = state.sessions.insert(session).await;
    info!("Created session {}", session.id);

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(load_session(&state, id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(session_not_found(id));
    }
    info!("Ended session {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/career
///
/// Sets the target career and analyzes it against the session's current skills.
pub async fn handle_set_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetCareerRequest>,
) -> Result<Json<CareerAnalysisResponse>, AppError> {
    let career = non_blank(&req.career, "career")?.to_string();

    let (session, ()) = state
        .sessions
        .update(id, |s| s.target_career = Some(career.clone()))
        .await
        .ok_or_else(|| session_not_found(id))?;

    let readiness = analyze(&career, &session.skills);
    info!("Session {id}: {}% ready for {career}", readiness.percent);

    Ok(Json(CareerAnalysisResponse { session, readiness }))
}

/// PUT /api/v1/sessions/:id/profile
///
/// Updates name, learning style and target career. When resume text is given,
/// the skill extractor runs first; its result replaces the session's skills
/// only on success. Readiness is recomputed against whatever skills remain.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let name = non_blank(&req.name, "name")?.to_string();
    let career = non_blank(&req.target_career, "target_career")?.to_string();
    let learning_style = req.learning_style.trim();
    let learning_style = (!learning_style.is_empty()).then(|| learning_style.to_string());

    // Fail fast before calling the extractor.
    load_session(&state, id).await?;

    // Extraction completes before the session is written.
    let outcome = match req.resume_text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => state.skill_extractor.extract(text).await,
        _ => WalkerOutcome::Empty,
    };

    let (session, skills_updated) = state
        .sessions
        .update(id, |s| {
            s.name = name;
            // Blank keeps the current style.
            if let Some(style) = learning_style {
                s.learning_style = style;
            }
            s.target_career = Some(career.clone());
            apply_extraction(&mut s.skills, outcome)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    if skills_updated {
        info!(
            "Session {id}: skills replaced from resume ({})",
            session.skills.join(", ")
        );
    }

    let readiness = analyze(&career, &session.skills);

    Ok(Json(ProfileResponse {
        session,
        skills_updated,
        readiness,
    }))
}

/// GET /api/v1/sessions/:id/readiness
pub async fn handle_session_readiness(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReadinessReport>, AppError> {
    let session = load_session(&state, id).await?;
    let career = require_career(&session)?;
    Ok(Json(analyze(career, &session.skills)))
}

/// GET /api/v1/sessions/:id/learning-path
pub async fn handle_session_learning_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let career = require_career(&session)?;
    Ok(Json(LearningPathResponse {
        career: career.to_string(),
        learning_path: generate_path(career, &session.skills),
    }))
}

/// POST /api/v1/sessions/:id/mentors/:name/connect
///
/// Idempotent: connecting twice reports `already_connected` instead of failing.
pub async fn handle_connect_mentor(
    State(state): State<AppState>,
    Path((id, mentor_name)): Path<(Uuid, String)>,
) -> Result<Json<ConnectMentorResponse>, AppError> {
    let mentor_name = non_blank(&mentor_name, "mentor name")?.to_string();

    let (session, already_connected) = state
        .sessions
        .update(id, |s| {
            let already = s.connected_mentors.contains(&mentor_name);
            if !already {
                s.connected_mentors.push(mentor_name.clone());
            }
            already
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(ConnectMentorResponse {
        connected_mentors: session.connected_mentors,
        already_connected,
    }))
}

async fn load_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

fn require_career(session: &Session) -> Result<&str, AppError> {
    session.target_career.as_deref().ok_or_else(|| {
        AppError::Validation("Select a career on the Dashboard first".to_string())
    })
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}
