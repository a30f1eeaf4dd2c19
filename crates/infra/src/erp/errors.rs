//! ERP-specific error types

use plantops_domain::PlantOpsError;
use thiserror::Error;

/// Errors raised by the ERP session client and sync engines.
///
/// A 404 from the gateway is a distinct variant because callers interpret
/// it as a normal negative-existence result (create-vs-update decisions),
/// not as a failure.
#[derive(Debug, Error)]
pub enum ErpError {
    /// Credential exchange failed or returned a malformed response.
    #[error("ERP authentication failed: {0}")]
    Auth(String),

    /// Transport or HTTP failure other than 404.
    #[error("ERP request to {path} failed{}: {message}", fmt_status(.status))]
    Request { path: String, status: Option<u16>, message: String },

    /// The gateway reported the entity as absent (HTTP 404).
    #[error("ERP entity not found: {path}")]
    NotFound { path: String },

    /// The gateway answered but the body did not parse.
    #[error("failed to decode ERP response from {path}: {message}")]
    Decode { path: String, message: String },

    /// Local persistence failure surfaced during sync.
    #[error("storage error during sync: {0}")]
    Storage(String),

    /// Invalid or missing configuration.
    #[error("ERP configuration error: {0}")]
    Config(String),
}

impl ErpError {
    /// True when the error represents legitimate absence rather than
    /// failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// Repository failures flow through reconciliation's per-record catch.
impl From<PlantOpsError> for ErpError {
    fn from(err: PlantOpsError) -> Self {
        match err {
            PlantOpsError::Auth(message) => Self::Auth(message),
            PlantOpsError::Config(message) => Self::Config(message),
            PlantOpsError::NotFound(message) => Self::Storage(message),
            PlantOpsError::Network(message) => Self::Request {
                path: String::new(),
                status: None,
                message,
            },
            PlantOpsError::Storage(message)
            | PlantOpsError::InvalidInput(message)
            | PlantOpsError::Internal(message) => Self::Storage(message),
        }
    }
}

impl From<ErpError> for PlantOpsError {
    fn from(err: ErpError) -> Self {
        match err {
            ErpError::Auth(message) => Self::Auth(message),
            ErpError::NotFound { path } => Self::NotFound(path),
            ErpError::Config(message) => Self::Config(message),
            ErpError::Storage(message) => Self::Storage(message),
            other @ (ErpError::Request { .. } | ErpError::Decode { .. }) => {
                Self::Network(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished() {
        let err = ErpError::NotFound { path: "/API_EQUIPMENT/Equipment('X')".to_string() };
        assert!(err.is_not_found());

        let err = ErpError::Request {
            path: "/API_EQUIPMENT/Equipment".to_string(),
            status: Some(500),
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn request_error_carries_path_and_status() {
        let err = ErpError::Request {
            path: "/API_EQUIPMENT/Equipment".to_string(),
            status: Some(503),
            message: "unavailable".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/API_EQUIPMENT/Equipment"));
        assert!(text.contains("503"));
    }

    #[test]
    fn storage_failures_convert_for_per_record_accounting() {
        let err: ErpError = PlantOpsError::Storage("tables locked".to_string()).into();
        assert!(matches!(err, ErpError::Storage(_)));
    }
}
