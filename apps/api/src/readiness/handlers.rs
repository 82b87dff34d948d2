//! Axum route handlers for stateless readiness analysis.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::readiness::catalog;
use crate::readiness::report::{analyze, ReadinessReport};

#[derive(Debug, Deserialize)]
pub struct ReadinessRequest {
    pub career: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerEntry {
    pub title: &'static str,
    pub requirements: &'static [&'static str],
}

/// GET /api/v1/careers
pub async fn handle_list_careers() -> Json<Vec<CareerEntry>> {
    Json(
        catalog::careers()
            .map(|title| CareerEntry {
                title,
                requirements: catalog::lookup(title),
            })
            .collect(),
    )
}

/// POST /api/v1/readiness
///
/// Scores the given skills against a career. Custom titles are accepted and
/// scored against the fallback requirement list.
pub async fn handle_readiness(
    Json(request): Json<ReadinessRequest>,
) -> Result<Json<ReadinessReport>, AppError> {
    let career = request.career.trim();
    if career.is_empty() {
        return Err(AppError::Validation("career cannot be empty".to_string()));
    }

    Ok(Json(analyze(career, &request.skills)))
}
