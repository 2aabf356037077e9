use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::warn;

pub const API_KEY_HEADER: &str = "Authorize";

/// Rejects requests whose `Authorize` header does not carry the configured
/// key. With no key configured every request passes.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match state.api_key.as_deref() {
        None => Ok(next.run(request).await),
        Some(expected) => verify_request(request, next, expected).await,
    }
}

async fn verify_request(
    request: Request,
    next: Next,
    expected: &str,
) -> Result<Response, StatusCode> {
    let Some(provided) = extract_api_key(&request) else {
        warn!(path = %request.uri().path(), "Missing API key");
        return Err(StatusCode::UNAUTHORIZED);
    };
    if !timing_safe_eq(provided.as_bytes(), expected.as_bytes()) {
        warn!(path = %request.uri().path(), "Rejected API key");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn extract_api_key(request: &Request) -> Option<String> {
    request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Length is not secret; only the contents are compared in constant time.
pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
