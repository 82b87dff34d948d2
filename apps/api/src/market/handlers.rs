use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::market::{courses, sample_jobs};
use crate::models::market::{Course, JobListing};

#[derive(Deserialize)]
pub struct CareerQuery {
    pub career: String,
}

/// GET /api/v1/jobs?career=
pub async fn handle_jobs(
    Query(params): Query<CareerQuery>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let career = params.career.trim();
    if career.is_empty() {
        return Err(AppError::Validation(
            "Select a career on the Dashboard first".to_string(),
        ));
    }
    Ok(Json(sample_jobs(career)))
}

/// GET /api/v1/courses
pub async fn handle_courses() -> Json<Vec<Course>> {
    Json(courses())
}
