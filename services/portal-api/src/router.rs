//! Route table

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the portal router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/otp", post(handlers::request_otp))
        .route("/api/auth/verify", post(handlers::verify_otp))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::me))
        // Admin (session + HR policy checked in the handlers)
        .route("/api/admin/jobs", get(handlers::list_jobs).post(handlers::create_job))
        .route(
            "/api/admin/jobs/:id",
            patch(handlers::update_job).delete(handlers::delete_job),
        )
        // Public site
        .route("/api/careers", get(handlers::list_openings))
        .route("/api/careers/apply", post(handlers::apply))
        .route("/api/careers/:slug", get(handlers::opening_by_slug))
        .route("/api/case-studies", get(handlers::case_studies))
        .route("/api/case-studies/:slug", get(handlers::case_study_by_slug))
        // Probes
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .with_state(state)
}
