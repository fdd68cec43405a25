//! Public careers handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use navagatha_notify::{JobApplication, Outbound};
use navagatha_types::Job;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub success: bool,
}

/// GET /api/careers
///
/// Public listing of open roles
pub async fn list_openings(State(state): State<AppState>) -> ApiResult<Json<Vec<Job>>> {
    Ok(Json(state.jobs.list().await?))
}

/// GET /api/careers/:slug
pub async fn opening_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Job>> {
    match state.jobs.find_by_slug(&slug).await? {
        Some(job) => Ok(Json(job)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /api/careers/apply
///
/// Forward a candidate application to the HR inbox. The mail IS the
/// application record, so a delivery failure fails the request.
pub async fn apply(
    State(state): State<AppState>,
    Json(form): Json<ApplicationForm>,
) -> ApiResult<Json<ApplyResponse>> {
    if form.name.is_empty() || form.email.is_empty() || form.job_title.is_empty() {
        return Err(ApiError::BadRequest(
            "name, email and job_title are required".to_string(),
        ));
    }

    let application = JobApplication {
        job_title: form.job_title,
        name: form.name,
        email: form.email,
        phone: form.phone,
        experience: form.experience,
        message: form.message,
    };
    state
        .notifier
        .send(Outbound::job_application(&state.config.hr_inbox, &application))
        .await?;

    tracing::info!(job_title = %application.job_title, "application forwarded to HR");
    Ok(Json(ApplyResponse { success: true }))
}
