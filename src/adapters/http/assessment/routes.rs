//! HTTP routes for the questionnaire page and the assessment API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_form, create_assessment, get_model, show_form, AssessmentAppState};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/analyze", post(analyze_form))
        .route("/api/assessments", post(create_assessment))
        .route("/api/model", get(get_model))
        .with_state(state)
}
