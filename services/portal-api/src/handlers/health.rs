//! Health check handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::time::Instant;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub checks: ReadyChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadyChecks {
    pub jobs_document: CheckResult,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub status: &'static str,
    pub latency_ms: u64,
}

/// GET /health - Liveness probe (fast, no dependencies)
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "portal-api",
    })
}

/// GET /ready - Readiness probe (checks the jobs document is readable)
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, StatusCode> {
    let start = Instant::now();
    let result = state.jobs.list().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => Ok(Json(ReadyResponse {
            status: "ready",
            service: "portal-api",
            checks: ReadyChecks {
                jobs_document: CheckResult {
                    status: "ok",
                    latency_ms,
                },
            },
        })),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
