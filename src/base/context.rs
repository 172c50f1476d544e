//! Ergonomic error context helpers.
//!
//! Extension traits that turn `serde_json` errors into context-rich
//! [`AnalyticsError`] variants.

use crate::base::analyticserror::AnalyticsError;

/// Extension trait for adding context to JSON Results.
pub trait JsonResultExt<T> {
    /// Add cookie-decoding context to a JSON error.
    ///
    /// # Example
    /// ```ignore
    /// use pageanalytics::base::context::JsonResultExt;
    ///
    /// let inner: String = serde_json::from_str(raw).decode_context("analytics_next_page_call")?;
    /// // Error: "Cookie analytics_next_page_call is not double-encoded JSON: ..."
    /// ```
    fn decode_context(self, cookie: &str) -> Result<T, AnalyticsError>;

    /// Add cookie-encoding context to a JSON error.
    fn encode_context(self, cookie: &str) -> Result<T, AnalyticsError>;

    /// Add configuration context to a JSON error.
    fn config_context(self) -> Result<T, AnalyticsError>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn decode_context(self, cookie: &str) -> Result<T, AnalyticsError> {
        self.map_err(|e| AnalyticsError::cookie_decode_failed(cookie, e))
    }

    fn encode_context(self, cookie: &str) -> Result<T, AnalyticsError> {
        self.map_err(|e| AnalyticsError::cookie_encode_failed(cookie, e))
    }

    fn config_context(self) -> Result<T, AnalyticsError> {
        self.map_err(|e| AnalyticsError::invalid_config(e.to_string()))
    }
}
