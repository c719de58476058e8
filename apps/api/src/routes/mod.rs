pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::market::handlers as market;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scoring
        .route("/api/v1/resumes/ats-score", post(scoring::handle_ats_score))
        .route("/create-resume", post(scoring::handle_create_resume))
        .route("/create-resume/", post(scoring::handle_create_resume))
        // Job market
        .route("/api/v1/market/sectors", get(market::handle_list_sectors))
        .route(
            "/api/v1/market/sectors/:sector/demand",
            get(market::handle_sector_demand),
        )
        .route("/api/v1/market/jobs", get(market::handle_jobs_by_skill))
        .fallback(not_found)
        .with_state(state)
}
