//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error every HTTP handler returns, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, resource id)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error naming the missing field
    pub fn required_field(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    /// Create a member not found error
    pub fn member_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::MemberNotFound, format!("Member {id} not found"))
            .with_detail("id", id)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Error body returned by every failing endpoint
///
/// ```json
/// { "code": 4001, "message": "Member 7 not found", "details": { "id": 7 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Numeric error code
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, rejection.body_text())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors; the client only sees the generic message
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
            let body = ApiResponse::error(&AppError::new(self.code));
            return (status, Json(body)).into_response();
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::DatabaseError);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database error");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "phone")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "phone");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_required_field() {
        let err = AppError::required_field("paymentDate");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "paymentDate is required");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_member_not_found() {
        let err = AppError::member_not_found(42);
        assert_eq!(err.code, ErrorCode::MemberNotFound);
        assert_eq!(err.message, "Member 42 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details.unwrap().get("id").unwrap(), 42);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::MemberNotFound, "Member not found");
        assert_eq!(format!("{}", err), "Member not found");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::member_not_found(7);
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 4001);
        assert_eq!(response.message, "Member 7 not found");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::error(&AppError::validation("name is too long"));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"code":2,"message":"name is too long"}"#);
    }
}
