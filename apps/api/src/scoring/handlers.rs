//! Axum route handlers for the ATS scoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::scoring::ats::ScoreResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume_data: CandidateProfile,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// Response shape of `POST /create-resume`.
#[derive(Debug, Serialize)]
pub struct CreateResumeResponse {
    pub ats_score: u32,
    pub feedback: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/ats-score
///
/// Scores the submitted profile against the job description.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let request = parse_request(payload)?;
    Ok(Json(run_scorer(&state, &request)))
}

/// POST /create-resume
///
/// Legacy resume endpoint. Returns the ATS score and feedback with a success status.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<CreateResumeResponse>, AppError> {
    let request = parse_request(payload)?;

    let result = run_scorer(&state, &request);

    Ok(Json(CreateResumeResponse {
        ats_score: result.score,
        feedback: result.feedback,
        missing_keywords: result.missing_keywords,
        matched_keywords: result.matched_keywords,
        status: "success".to_string(),
    }))
}

fn parse_request(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<ScoreRequest, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|e| AppError::Validation(format!("Invalid JSON data: {}", e.body_text())))
}

fn run_scorer(state: &AppState, request: &ScoreRequest) -> ScoreResult {
    let result = state
        .scorer
        .score(&request.resume_data, request.job_description.as_deref());

    info!(
        backend = state.scorer.backend(),
        score = result.score,
        matched = result.matched_keywords.len(),
        missing = result.missing_keywords.len(),
        "ATS score computed"
    );

    result
}
