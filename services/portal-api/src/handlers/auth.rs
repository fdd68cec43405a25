//! Authentication handlers (request OTP, verify, logout, me)

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use navagatha_notify::Outbound;

use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthSession, SESSION_COOKIE};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OtpRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub email: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/auth/otp
///
/// Issue a login code for an organizational address and mail it out. The
/// code is useless unless delivered, so a notifier failure fails the whole
/// request.
pub async fn request_otp(
    State(state): State<AppState>,
    Json(req): Json<OtpRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    if !state.auth.is_org_email(&req.email) {
        return Err(ApiError::DomainNotAllowed);
    }

    let code = state.auth.request_code(&req.email);
    state
        .notifier
        .send(Outbound::login_code(&req.email, &code))
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// POST /api/auth/verify
///
/// Exchange email + code for a session cookie
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.email.is_empty() || req.code.is_empty() {
        return Err(ApiError::BadRequest("email and code are required".to_string()));
    }

    if !state.auth.verify_code(&req.email, &req.code) {
        return Err(ApiError::ChallengeInvalid);
    }

    let token = state.auth.create_session(&req.email)?;
    let max_age = state.config.auth.session_lifetime.as_secs();
    let cookie = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}{}",
        if state.config.production { "; Secure" } else { "" }
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse { success: true }),
    ))
}

/// POST /api/auth/logout
///
/// Expire the caller's cookie. The token itself stays valid until its
/// natural expiry; there is no server-side revocation.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse { success: true }),
    )
}

/// GET /api/auth/me
///
/// Identity behind the presented session
pub async fn me(session: AuthSession) -> Json<MeResponse> {
    Json(MeResponse {
        email: session.email().to_string(),
    })
}
