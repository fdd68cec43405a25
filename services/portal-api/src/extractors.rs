//! Axum extractors for authentication

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;

use navagatha_auth_core::SessionClaims;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Authenticated session extracted from the request cookie.
///
/// Rejection is always the same opaque 401 regardless of whether the cookie
/// was missing, malformed, forged, or expired.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub claims: SessionClaims,
}

impl AuthSession {
    /// The verified email identity
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let app_state = AppState::from_ref(state);

            let token = session_cookie(parts).ok_or(ApiError::Unauthenticated)?;

            let claims = app_state
                .auth
                .resolve_session(&token)
                .ok_or(ApiError::Unauthenticated)?;

            Ok(AuthSession { claims })
        })
    }
}

/// Pull the session token out of the Cookie header
fn session_cookie(parts: &Parts) -> Option<String> {
    let cookie_header = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix("session=") {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
