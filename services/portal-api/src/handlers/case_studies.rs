//! Public case-study handlers

use axum::extract::{Path, State};
use axum::Json;

use navagatha_types::CaseStudy;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/case-studies
pub async fn case_studies(State(state): State<AppState>) -> ApiResult<Json<Vec<CaseStudy>>> {
    Ok(Json(state.case_studies.list().await?))
}

/// GET /api/case-studies/:slug
pub async fn case_study_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CaseStudy>> {
    match state.case_studies.find_by_slug(&slug).await? {
        Some(study) => Ok(Json(study)),
        None => Err(ApiError::NotFound),
    }
}
