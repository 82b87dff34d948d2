pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::market::handlers as market;
use crate::profile::handlers as profile;
use crate::readiness::handlers as readiness;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Readiness
        .route("/api/v1/careers", get(readiness::handle_list_careers))
        .route("/api/v1/readiness", post(readiness::handle_readiness))
        // Sessions / profile
        .route("/api/v1/sessions", post(profile::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(profile::handle_get_session).delete(profile::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/career", put(profile::handle_set_career))
        .route(
            "/api/v1/sessions/:id/profile",
            put(profile::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/readiness",
            get(profile::handle_session_readiness),
        )
        .route(
            "/api/v1/sessions/:id/learning-path",
            get(profile::handle_session_learning_path),
        )
        .route(
            "/api/v1/sessions/:id/mentors/:name/connect",
            post(profile::handle_connect_mentor),
        )
        // Agent-backed data
        .route("/api/v1/skills", get(skills::handle_skill_graph))
        .route("/api/v1/skills/insights", get(skills::handle_insights))
        .route("/api/v1/skills/extract", post(skills::handle_extract))
        .route("/api/v1/mentors", get(skills::handle_mentors))
        // Market
        .route("/api/v1/jobs", get(market::handle_jobs))
        .route("/api/v1/courses", get(market::handle_courses))
        .with_state(state)
}
