//! Tracker configuration.
//!
//! Every name and constant the tracker reads from the page lives here, so a
//! deployment can rename a cookie or widen the A/B band without touching
//! the aggregation code.

use crate::base::analyticserror::AnalyticsError;
use crate::base::context::JsonResultExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Cookie carrying options into the next page's initial pageview.
pub const NEXT_PAGE_CALL_COOKIE: &str = "analytics_next_page_call";

/// Cookie set by the edge with the negotiated TLS protocol version.
pub const TLS_VERSION_COOKIE: &str = "TLSversion";

/// Block of dimensions assigned to A/B tests.
///
/// Tags outside this band are dropped without being reported.
pub const AB_TEST_MIN_DIMENSION: u32 = 40;
pub const AB_TEST_MAX_DIMENSION: u32 = 49;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Name of the cookie holding deferred tracking options.
    pub next_page_cookie: String,
    /// Name of the cookie holding the TLS protocol version.
    pub tls_version_cookie: String,
    /// Prefix of page metadata tag names, e.g. `govuk:`.
    pub meta_prefix: String,
    /// Prefix of A/B assignment tag names.
    pub ab_test_prefix: String,
    /// Lowest accepted A/B dimension index.
    pub ab_test_min_dimension: u32,
    /// Highest accepted A/B dimension index.
    pub ab_test_max_dimension: u32,
    /// HTTP status reported when the page does not expose one.
    pub default_http_status: u16,
    /// TLS version reported when the cookie is missing.
    pub default_tls_version: String,
    /// Script filename pattern passed to error tracking.
    pub error_filename_pattern: String,
    /// Selector for links counted as downloads.
    pub download_link_selector: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            next_page_cookie: NEXT_PAGE_CALL_COOKIE.to_string(),
            tls_version_cookie: TLS_VERSION_COOKIE.to_string(),
            meta_prefix: "govuk:".to_string(),
            ab_test_prefix: "govuk:ab-test".to_string(),
            ab_test_min_dimension: AB_TEST_MIN_DIMENSION,
            ab_test_max_dimension: AB_TEST_MAX_DIMENSION,
            default_http_status: 200,
            default_tls_version: "unknown".to_string(),
            error_filename_pattern: r"gov\.uk".to_string(),
            download_link_selector:
                r#"a[href*="/government/uploads"], a[href*="assets.publishing.service.gov.uk"]"#
                    .to_string(),
        }
    }
}

impl TrackerConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, AnalyticsError> {
        let config: TrackerConfig = serde_json::from_str(json).config_context()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self, AnalyticsError> {
        let json = fs::read_to_string(path)
            .map_err(|e| AnalyticsError::config_io(path.display().to_string(), e))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.next_page_cookie.is_empty() {
            return Err(AnalyticsError::invalid_config(
                "next_page_cookie must not be empty",
            ));
        }
        if self.tls_version_cookie.is_empty() {
            return Err(AnalyticsError::invalid_config(
                "tls_version_cookie must not be empty",
            ));
        }
        if self.ab_test_min_dimension > self.ab_test_max_dimension {
            return Err(AnalyticsError::invalid_config(format!(
                "A/B band {}..={} is inverted",
                self.ab_test_min_dimension, self.ab_test_max_dimension
            )));
        }
        Ok(())
    }

    /// The accepted A/B dimension indices.
    pub fn ab_test_range(&self) -> RangeInclusive<u32> {
        self.ab_test_min_dimension..=self.ab_test_max_dimension
    }

    /// Set the deferred-options cookie name.
    pub fn next_page_cookie(mut self, name: impl Into<String>) -> Self {
        self.next_page_cookie = name.into();
        self
    }

    /// Set the TLS version cookie name.
    pub fn tls_version_cookie(mut self, name: impl Into<String>) -> Self {
        self.tls_version_cookie = name.into();
        self
    }

    /// Set the metadata tag prefix.
    pub fn meta_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.meta_prefix = prefix.into();
        self
    }

    /// Set the A/B tag prefix.
    pub fn ab_test_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ab_test_prefix = prefix.into();
        self
    }

    /// Set the accepted A/B dimension band (inclusive).
    pub fn ab_test_band(mut self, min: u32, max: u32) -> Self {
        self.ab_test_min_dimension = min;
        self.ab_test_max_dimension = max;
        self
    }

    /// Set the fallback HTTP status.
    pub fn default_http_status(mut self, status: u16) -> Self {
        self.default_http_status = status;
        self
    }

    /// Set the TLS version reported when the cookie is missing.
    pub fn default_tls_version(mut self, version: impl Into<String>) -> Self {
        self.default_tls_version = version.into();
        self
    }

    /// Set the error-tracking filename pattern.
    pub fn error_filename_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.error_filename_pattern = pattern.into();
        self
    }

    /// Set the download-link selector.
    pub fn download_link_selector(mut self, selector: impl Into<String>) -> Self {
        self.download_link_selector = selector.into();
        self
    }
}
