//! Typed API error for HTTP handlers.
//!
//! Converts auth and service failures into JSON responses with the right
//! status code. Handlers return `Result<Json<T>, ApiError>` instead of
//! losing error context with a bare `StatusCode`.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use docgate_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to a JSON response: `{"error": "message"}`.
/// `Internal` logs the real error server-side and returns a static
/// message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 401 Unauthorized — no basic-auth credentials supplied. The response
    /// carries a `WWW-Authenticate: Basic` challenge.
    AuthRequired,
    /// 403 Forbidden — credentials supplied but wrong.
    AuthRejected,
    /// 400 Bad Request — unknown collection or a store-rejected query;
    /// the message is passed through to the caller.
    BadRequest(String),
    /// 500 Internal Server Error — unexpected failure. Details logged,
    /// not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::AuthRequired => (StatusCode::UNAUTHORIZED, "Authentication required".to_owned()),
            Self::AuthRejected => (StatusCode::FORBIDDEN, "Bad username or password".to_owned()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let challenge = status == StatusCode::UNAUTHORIZED;
        let body = serde_json::json!({"error": message});
        let mut response = (status, Json(body)).into_response();
        if challenge {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"docgate\""),
            );
        }
        response
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::UnknownCollection(_) => Self::BadRequest(err.to_string()),
            // Store rejections are client errors here: pagination reads are
            // never retried and the cause belongs to the caller's request.
            ServiceError::Storage(ref e) => {
                tracing::warn!(transient = e.is_transient(), "store rejected query: {err}");
                Self::BadRequest(err.to_string())
            },
            ServiceError::InvalidConfiguration(_) => Self::Internal(err.into()),
        }
    }
}
