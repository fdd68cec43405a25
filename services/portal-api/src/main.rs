//! Navagatha Portal API
//!
//! HTTP service for the public site endpoints and the OTP-gated admin
//! surface.

use std::net::SocketAddr;
use std::sync::Arc;

use navagatha_auth_core::AuthService;
use navagatha_notify::{Notifier, SmtpNotifier, Unconfigured};
use navagatha_store::{JsonCaseStudyRepository, JsonJobRepository};
use tracing_subscriber::EnvFilter;

use portal_api::config::Config;
use portal_api::router;
use portal_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Navagatha Portal API");

    let config = Config::from_env()?;

    let auth = AuthService::new(config.auth.clone())?;
    let jobs = Arc::new(JsonJobRepository::new(&config.jobs_path));
    let case_studies = Arc::new(JsonCaseStudyRepository::new(&config.case_studies_path));
    let notifier: Arc<dyn Notifier> = match &config.smtp {
        Some(smtp) => Arc::new(SmtpNotifier::new(smtp)?),
        None => {
            tracing::warn!("no SMTP relay configured; login codes cannot be delivered");
            Arc::new(Unconfigured)
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let app = router(AppState::new(auth, jobs, case_studies, notifier, config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
