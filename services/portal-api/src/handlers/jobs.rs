//! Admin job-posting handlers
//!
//! Every handler here runs behind the session extractor AND the HR policy:
//! a valid session that is not the HR account gets a 403 before any
//! repository access happens.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use navagatha_types::{Job, JobId, JobPatch, NewJob};

use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn require_hr(state: &AppState, session: &AuthSession) -> Result<(), ApiError> {
    if state.auth.is_privileged(&session.claims) {
        Ok(())
    } else {
        tracing::debug!(email = session.email(), "non-HR session refused admin access");
        Err(ApiError::Forbidden)
    }
}

/// A malformed id can address no record, so it reads as not-found rather
/// than leaking the id format.
fn parse_id(id: &str) -> Result<JobId, ApiError> {
    JobId::parse(id).map_err(|_| ApiError::NotFound)
}

/// GET /api/admin/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<Job>>> {
    require_hr(&state, &session)?;
    Ok(Json(state.jobs.list().await?))
}

/// POST /api/admin/jobs
pub async fn create_job(
    State(state): State<AppState>,
    session: AuthSession,
    Json(input): Json<NewJob>,
) -> ApiResult<Json<Job>> {
    require_hr(&state, &session)?;

    if input.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".to_string()));
    }

    let job = state.jobs.create(input).await?;
    tracing::info!(id = %job.id, slug = %job.slug, "job posting created");
    Ok(Json(job))
}

/// PATCH /api/admin/jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> ApiResult<Json<Job>> {
    require_hr(&state, &session)?;

    let id = parse_id(&id)?;
    match state.jobs.update(&id, patch).await? {
        Some(job) => Ok(Json(job)),
        None => Err(ApiError::NotFound),
    }
}

/// DELETE /api/admin/jobs/:id
pub async fn delete_job(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    require_hr(&state, &session)?;

    let id = parse_id(&id)?;
    if !state.jobs.delete(&id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(%id, "job posting deleted");
    Ok(Json(DeleteResponse { success: true }))
}
