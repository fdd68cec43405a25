//! Common test utilities for portal-api integration tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use navagatha_auth_core::{AuthConfig, AuthService};
use navagatha_notify::{Notifier, NotifyError, Outbound};
use navagatha_store::{JsonCaseStudyRepository, JsonJobRepository};
use portal_api::config::Config;
use portal_api::state::AppState;

/// 32-byte secret shared by the app under test and the cookie-minting twin
pub const TEST_SECRET: &str = "integration-test-session-secret!";

/// One pre-seeded job so public endpoints have something to serve
pub const SEED_JOBS: &str = r#"[
    {
        "id": "6d4c9d5e-0af0-45d6-8f6b-93d04f6e4b3a",
        "slug": "platform-engineer",
        "title": "Platform Engineer",
        "department": "Engineering",
        "location": "Hyderabad",
        "type": "Full-time",
        "description": "Keep the delivery platform healthy.",
        "overview": "You will own build and deployment infrastructure.",
        "responsibilities": ["Maintain CI pipelines"],
        "requirements": ["3+ years infrastructure experience"],
        "benefits": ["Health insurance"]
    }
]"#;

pub const SEED_CASE_STUDIES: &str = r#"[
    {
        "id": "cs-001",
        "title": "Retail Analytics Platform",
        "slug": "retail-analytics-platform",
        "category": "Data Engineering",
        "client": "Confidential Retailer",
        "summary": "Unified reporting across 40 stores.",
        "content": "Full write-up.",
        "links": [{ "name": "Overview", "url": "https://example.com" }]
    }
]"#;

/// In-memory notifier that records every message and can be told to fail
/// the next delivery
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Outbound>>,
    fail_next: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next send fail as if the relay were down
    #[allow(dead_code)]
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Snapshot of everything delivered so far
    #[allow(dead_code)]
    pub fn sent(&self) -> Vec<Outbound> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: Outbound) -> Result<(), NotifyError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NotifyError::NotConfigured);
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// A router over tempfile-backed stores plus handles for assertions
pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
    /// Twin auth service sharing the app's secret, for minting cookies
    /// without driving the whole OTP flow
    pub auth: AuthService,
    pub dir: TempDir,
}

impl TestApp {
    /// Cookie header value for a session minted for `email`
    #[allow(dead_code)]
    pub fn session_cookie_for(&self, email: &str) -> String {
        format!("session={}", self.auth.create_session(email).unwrap())
    }
}

fn auth_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET, "hr@navagathatech.com", "navagathatech.com")
}

pub fn test_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let jobs_path = dir.path().join("jobs.json");
    let case_studies_path = dir.path().join("case-studies.json");
    std::fs::write(&jobs_path, SEED_JOBS).unwrap();
    std::fs::write(&case_studies_path, SEED_CASE_STUDIES).unwrap();

    let config = Config {
        http_port: 0,
        production: false,
        auth: auth_config(),
        jobs_path: jobs_path.clone(),
        case_studies_path: case_studies_path.clone(),
        hr_inbox: "info@navagathatech.com".to_string(),
        smtp: None,
    };

    let notifier = Arc::new(RecordingNotifier::new());
    let state = AppState::new(
        AuthService::new(config.auth.clone()).unwrap(),
        Arc::new(JsonJobRepository::new(jobs_path)),
        Arc::new(JsonCaseStudyRepository::new(case_studies_path)),
        notifier.clone(),
        config,
    );

    TestApp {
        router: portal_api::router(state),
        notifier,
        auth: AuthService::new(auth_config()).unwrap(),
        dir,
    }
}

/// Drive one request through the router
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Pull the `session=...` pair out of a Set-Cookie header
#[allow(dead_code)]
pub fn set_cookie_pair(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response carries no Set-Cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Find the 6-digit code inside a rendered login mail
#[allow(dead_code)]
pub fn extract_code(html: &str) -> String {
    let bytes = html.as_bytes();
    for i in 0..bytes.len().saturating_sub(5) {
        if bytes[i..i + 6].iter().all(|b| b.is_ascii_digit()) {
            let clean_before = i == 0 || !bytes[i - 1].is_ascii_digit();
            let clean_after = i + 6 >= bytes.len() || !bytes[i + 6].is_ascii_digit();
            if clean_before && clean_after {
                return html[i..i + 6].to_string();
            }
        }
    }
    panic!("no 6-digit code found in message body");
}
