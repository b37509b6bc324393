//! Basic-auth gate, applied to every collection route.
//!
//! Extraction happens here; the allow/deny decision is the pure
//! `docgate_core::authenticate`. A deny terminates the request before any
//! registry lookup or store query.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use docgate_core::{AuthDecision, Credentials, DenyReason, authenticate};

use crate::AppState;
use crate::api_error::ApiError;

/// Middleware for `axum::middleware::from_fn_with_state`.
pub async fn require_basic_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials = extract_basic(request.headers());
    match authenticate(credentials.as_ref(), &state.config) {
        AuthDecision::Allow => Ok(next.run(request).await),
        AuthDecision::Deny(DenyReason::MissingCredentials) => Err(ApiError::AuthRequired),
        AuthDecision::Deny(DenyReason::BadCredentials) => Err(ApiError::AuthRejected),
    }
}

/// Pull basic-auth credentials out of the `Authorization` header.
///
/// Anything malformed (wrong scheme, bad base64, no colon) counts as no
/// credentials at all, which the caller answers with a 401 challenge.
fn extract_basic(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some(Credentials { username: username.to_owned(), password: password.to_owned() })
}
