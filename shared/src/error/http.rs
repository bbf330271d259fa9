//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::ValidationFailed | Self::InvalidRequest | Self::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }

            // 500 Internal Server Error
            Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
