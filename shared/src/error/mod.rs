//! Unified error system for the gym service
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Error body returned to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Membership errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::member_not_found(7);
//! assert_eq!(err.code, ErrorCode::MemberNotFound);
//!
//! let err = AppError::required_field("phone");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 7);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
