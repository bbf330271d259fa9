//! Error system for the records service
//!
//! - [`ErrorCode`]: numeric codes shared by every error the service raises
//! - [`AppError`]: error value carrying a code and a human-readable message
//!
//! Request-shape errors (bad JSON, failed validation, bad path parameter)
//! surface to clients as `400 Bad Request` with a plain-text body. Database
//! failures never travel through this type on the request path; the
//! repository folds them into a status envelope instead.
//!
//! # Code Ranges
//!
//! - 0xxx: Request errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::invalid_format("invalid employee ID");
//! assert_eq!(err.code, ErrorCode::InvalidFormat);
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::AppError;
