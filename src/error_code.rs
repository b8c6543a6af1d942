//! Canonical classification of Watson service failures.
//!
//! Watson APIs report failures as a non-2xx status with a JSON body such as
//! `{"error": "Model en-XX not found", "code": 404}`. The status alone decides
//! the class; the body only contributes the human-readable message.
//!
//! ```rust
//! use watson_sdk::error_code::StandardErrorCode;
//!
//! let code = StandardErrorCode::from_http_status(503);
//! assert_eq!(code.name(), "service_unavailable");
//! assert!(code.retryable());
//! ```

use std::fmt;

/// Standard error class for a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardErrorCode {
    /// 400: malformed request or invalid parameter value
    InvalidRequest,
    /// 401: missing, invalid, or expired credentials
    Authentication,
    /// 403: credentials lack access to the instance or resource
    PermissionDenied,
    /// 404: workspace, customization, model or session does not exist
    NotFound,
    /// 406: unsupported `Accept` type
    NotAcceptable,
    /// 409: resource is busy (e.g. a custom model that is being trained)
    Conflict,
    /// 413: request payload exceeds the service limit
    RequestTooLarge,
    /// 415: unsupported `Content-Type`
    UnsupportedMediaType,
    /// 429: rate limit exceeded
    RateLimited,
    /// 500: internal service error
    ServerError,
    /// 503: service temporarily unavailable
    ServiceUnavailable,
    /// 408/504: request timed out
    Timeout,
    /// Any other status
    Unknown,
}

impl StandardErrorCode {
    /// Returns the standard name (e.g., `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::NotAcceptable => "not_acceptable",
            Self::Conflict => "conflict",
            Self::RequestTooLarge => "request_too_large",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether this error is retryable by default.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited
                | Self::ServerError
                | Self::ServiceUnavailable
                | Self::Timeout
                | Self::Conflict
        )
    }

    /// Maps an HTTP status code to the matching `StandardErrorCode`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            406 => Self::NotAcceptable,
            408 | 504 => Self::Timeout,
            409 => Self::Conflict,
            413 => Self::RequestTooLarge,
            415 => Self::UnsupportedMediaType,
            429 => Self::RateLimited,
            500 | 502 => Self::ServerError,
            503 => Self::ServiceUnavailable,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for StandardErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_not_retryable() {
        for status in [400, 401, 403, 404, 406, 413, 415] {
            let code = StandardErrorCode::from_http_status(status);
            assert!(!code.retryable(), "{status} should not be retryable");
        }
    }

    #[test]
    fn busy_and_transient_statuses_are_retryable() {
        for status in [409, 429, 500, 503, 504] {
            assert!(StandardErrorCode::from_http_status(status).retryable());
        }
        assert_eq!(StandardErrorCode::from_http_status(418), StandardErrorCode::Unknown);
    }
}
