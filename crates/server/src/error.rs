//! API error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plantops_domain::PlantOpsError;
use plantops_infra::erp::ErpError;
use serde::Serialize;

/// Error as rendered to HTTP clients.
///
/// Upstream ERP failures map to 502: the request was valid, the dependency
/// was not available or rejected it.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Upstream(message) => (StatusCode::BAD_GATEWAY, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ErpError> for ApiError {
    fn from(err: ErpError) -> Self {
        match err {
            ErpError::NotFound { .. } => Self::NotFound(err.to_string()),
            ErpError::Storage(message) => Self::Internal(message),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl From<PlantOpsError> for ApiError {
    fn from(err: PlantOpsError) -> Self {
        match err {
            PlantOpsError::NotFound(message) => Self::NotFound(message),
            PlantOpsError::Network(message) | PlantOpsError::Auth(message) => {
                Self::Upstream(message)
            }
            other => Self::Internal(other.to_string()),
        }
    }
}
