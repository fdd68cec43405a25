//! Application state

use std::sync::Arc;

use navagatha_auth_core::AuthService;
use navagatha_notify::Notifier;
use navagatha_store::{CaseStudyRepository, JobRepository};

use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service: OTP challenges, session tokens, HR policy
    pub auth: Arc<AuthService>,
    /// Job posting collection
    pub jobs: Arc<dyn JobRepository>,
    /// Case study collection (read-only)
    pub case_studies: Arc<dyn CaseStudyRepository>,
    /// Outbound mail
    pub notifier: Arc<dyn Notifier>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        auth: AuthService,
        jobs: Arc<dyn JobRepository>,
        case_studies: Arc<dyn CaseStudyRepository>,
        notifier: Arc<dyn Notifier>,
        config: Config,
    ) -> Self {
        Self {
            auth: Arc::new(auth),
            jobs,
            case_studies,
            notifier,
            config: Arc::new(config),
        }
    }
}
