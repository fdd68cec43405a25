//! HTTP handlers

mod auth;
mod careers;
mod case_studies;
mod health;
mod jobs;

pub use auth::{logout, me, request_otp, verify_otp};
pub use careers::{apply, list_openings, opening_by_slug};
pub use case_studies::{case_studies, case_study_by_slug};
pub use health::{health, ready};
pub use jobs::{create_job, delete_job, list_jobs, update_job};
