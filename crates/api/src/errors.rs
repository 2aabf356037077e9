use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recordbook_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,

            DomainError::InvalidDomainName(_)
            | DomainError::InvalidRecordData { .. }
            | DomainError::UnsupportedRecordType(_)
            | DomainError::InvalidRecordClass(_) => StatusCode::BAD_REQUEST,

            DomainError::RecordMismatch(_) => StatusCode::CONFLICT,

            DomainError::PersistenceError(_) | DomainError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
