//! Basic-auth allow/deny decision.
//!
//! Pure logic: credential extraction from the HTTP request lives in the
//! http crate; this module only decides. The decision runs before any
//! other request handling, so a deny produces no registry or store work.

use crate::config::GatewayConfig;

/// Username/password pair extracted from a request. Request-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No basic-auth credentials were supplied at all (401).
    MissingCredentials,
    /// Credentials were supplied but did not match (403).
    BadCredentials,
}

/// Outcome of authenticating one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    Deny(DenyReason),
}

/// Decide whether a request may proceed.
///
/// Rules, in order:
/// 1. no credentials → deny `MissingCredentials`
/// 2. username mismatch → deny `BadCredentials`
/// 3. configured password set and mismatched → deny `BadCredentials`;
///    with no configured password any password passes once the username
///    matches (intentional weak-auth mode, not a bug)
/// 4. otherwise allow
pub fn authenticate(credentials: Option<&Credentials>, config: &GatewayConfig) -> AuthDecision {
    let Some(creds) = credentials else {
        return AuthDecision::Deny(DenyReason::MissingCredentials);
    };
    if creds.username != config.username {
        return AuthDecision::Deny(DenyReason::BadCredentials);
    }
    if let Some(expected) = config.password.as_deref() {
        if creds.password != expected {
            return AuthDecision::Deny(DenyReason::BadCredentials);
        }
    }
    AuthDecision::Allow
}
