use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::market::lookup::parse_skill_list;
use crate::models::posting::DemandCount;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SectorsResponse {
    pub sectors: Vec<String>,
}

#[derive(Deserialize)]
pub struct DemandQuery {
    pub top_n: Option<usize>,
}

#[derive(Serialize)]
pub struct SectorDemandResponse {
    pub sector: String,
    pub top_jobs: Vec<DemandCount>,
    pub top_skills: Vec<DemandCount>,
}

#[derive(Deserialize)]
pub struct SkillsQuery {
    pub skills: String,
}

#[derive(Serialize)]
pub struct JobsBySkillResponse {
    pub skills: Vec<String>,
    pub jobs: Vec<String>,
}

/// GET /api/v1/market/sectors
pub async fn handle_list_sectors(
    State(state): State<AppState>,
) -> Result<Json<SectorsResponse>, AppError> {
    let sectors = state.market()?.sectors();
    Ok(Json(SectorsResponse { sectors }))
}

/// GET /api/v1/market/sectors/:sector/demand
pub async fn handle_sector_demand(
    State(state): State<AppState>,
    Path(sector): Path<String>,
    query: Result<Query<DemandQuery>, QueryRejection>,
) -> Result<Json<SectorDemandResponse>, AppError> {
    let Query(params) = query.map_err(invalid_query)?;
    let top_n = params.top_n.unwrap_or(state.config.market_top_n);
    let demand = state.market()?.demand_by_sector(&sector, top_n);
    if demand.top_jobs.is_empty() {
        tracing::debug!("No job postings found for sector {sector}");
    }
    Ok(Json(SectorDemandResponse {
        sector,
        top_jobs: demand.top_jobs,
        top_skills: demand.top_skills,
    }))
}

/// GET /api/v1/market/jobs?skills=a,b
pub async fn handle_jobs_by_skill(
    State(state): State<AppState>,
    query: Result<Query<SkillsQuery>, QueryRejection>,
) -> Result<Json<JobsBySkillResponse>, AppError> {
    let Query(params) = query.map_err(invalid_query)?;
    let skills = parse_skill_list(&params.skills);
    if skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let jobs = state.market()?.jobs_by_skill(&params.skills);
    Ok(Json(JobsBySkillResponse { skills, jobs }))
}

fn invalid_query(rejection: QueryRejection) -> AppError {
    AppError::Validation(format!("Invalid query string: {}", rejection.body_text()))
}
