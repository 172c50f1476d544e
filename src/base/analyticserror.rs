use thiserror::Error;

/// Errors raised inside the crate.
///
/// None of these ever reach a tracking call: the cookie and page paths
/// convert them to their documented default and log them instead.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AnalyticsError {
    #[error("Cookie {cookie} is not double-encoded JSON: {reason}")]
    CookieDecodeFailed { cookie: String, reason: String },
    #[error("Cookie {cookie} does not hold a JSON object")]
    CookieNotObject { cookie: String },
    #[error("Cookie {cookie} could not be encoded: {reason}")]
    CookieEncodeFailed { cookie: String, reason: String },
    #[error("Invalid tracker configuration: {message}")]
    InvalidConfig { message: String },
    #[error("Could not read configuration from {path}: {reason}")]
    ConfigIo { path: String, reason: String },
}

impl AnalyticsError {
    pub fn cookie_decode_failed(cookie: impl Into<String>, reason: impl ToString) -> Self {
        AnalyticsError::CookieDecodeFailed {
            cookie: cookie.into(),
            reason: reason.to_string(),
        }
    }

    pub fn cookie_not_object(cookie: impl Into<String>) -> Self {
        AnalyticsError::CookieNotObject {
            cookie: cookie.into(),
        }
    }

    pub fn cookie_encode_failed(cookie: impl Into<String>, reason: impl ToString) -> Self {
        AnalyticsError::CookieEncodeFailed {
            cookie: cookie.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        AnalyticsError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn config_io(path: impl Into<String>, reason: impl ToString) -> Self {
        AnalyticsError::ConfigIo {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for the errors a cookie read degrades to "absent".
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            AnalyticsError::CookieDecodeFailed { .. } | AnalyticsError::CookieNotObject { .. }
        )
    }
}
