//! Custom dimensions for the current page.
//!
//! A [`DimensionMapping`] is rebuilt for every tracking call by the
//! [`DimensionAggregator`](aggregator::DimensionAggregator), which runs an
//! ordered list of [`DimensionSource`]s and merges their output, later
//! sources winning on collision:
//!
//! 1. [`BrowserSignals`](browser::BrowserSignals): status code, TLS version, pixel ratio
//! 2. [`PageMetadata`](metadata::PageMetadata): `govuk:*` meta tags
//! 3. [`DomCounts`](dom::DomCounts): section and section-link counts
//! 4. [`AbTestAssignments`](abtest::AbTestAssignments): `govuk:ab-test*` meta tags
//!
//! Every value is a string by the time it leaves this module.

pub mod abtest;
pub mod aggregator;
pub mod browser;
pub mod dom;
pub mod metadata;

use crate::config::TrackerConfig;
use crate::cookies::jar::CookieJar;
use crate::deferred::TrackingOptions;
use crate::page::Page;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Numeric custom-dimension slot, rendered as `dimension<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DimensionKey(pub u32);

impl DimensionKey {
    pub const SECTION: DimensionKey = DimensionKey(1);
    pub const FORMAT: DimensionKey = DimensionKey(2);
    pub const THEMES: DimensionKey = DimensionKey(3);
    pub const CONTENT_ID: DimensionKey = DimensionKey(4);
    pub const SEARCH_RESULT_COUNT: DimensionKey = DimensionKey(5);
    pub const PUBLISHING_GOVERNMENT: DimensionKey = DimensionKey(6);
    pub const POLITICAL_STATUS: DimensionKey = DimensionKey(7);
    pub const ORGANISATIONS: DimensionKey = DimensionKey(9);
    pub const WORLD_LOCATIONS: DimensionKey = DimensionKey(10);
    pub const DEVICE_PIXEL_RATIO: DimensionKey = DimensionKey(11);
    pub const HTTP_STATUS: DimensionKey = DimensionKey(15);
    pub const TLS_VERSION: DimensionKey = DimensionKey(16);
    pub const SCHEMA_NAME: DimensionKey = DimensionKey(17);
    pub const RENDERING_APPLICATION: DimensionKey = DimensionKey(20);
    pub const SECTION_COUNT: DimensionKey = DimensionKey(26);
    pub const SECTION_LINK_COUNT: DimensionKey = DimensionKey(27);
    pub const NAVIGATION_PAGE_TYPE: DimensionKey = DimensionKey(32);
    pub const USER_JOURNEY_STAGE: DimensionKey = DimensionKey(33);
    pub const NAVIGATION_DOCUMENT_TYPE: DimensionKey = DimensionKey(34);
    pub const CONTENT_HAS_HISTORY: DimensionKey = DimensionKey(39);
    pub const TAXON_SLUG: DimensionKey = DimensionKey(56);
    pub const TAXON_ID: DimensionKey = DimensionKey(57);
    pub const TAXON_SLUGS: DimensionKey = DimensionKey(58);
    pub const TAXON_IDS: DimensionKey = DimensionKey(59);

    pub const fn index(self) -> u32 {
        self.0
    }

    /// Parse `dimension<N>`.
    pub fn parse(name: &str) -> Option<Self> {
        let digits = name.strip_prefix("dimension")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(DimensionKey)
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dimension{}", self.0)
    }
}

impl From<u32> for DimensionKey {
    fn from(index: u32) -> Self {
        DimensionKey(index)
    }
}

/// Dimension values for one tracking call, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionMapping {
    entries: BTreeMap<DimensionKey, String>,
}

impl DimensionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: DimensionKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: DimensionKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: DimensionKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Overlay `other`; its values win on key collision.
    pub fn merge(&mut self, other: DimensionMapping) {
        self.entries.extend(other.entries);
    }

    /// Convert to tracking options keyed `dimension<N>`.
    pub fn into_options(self) -> TrackingOptions {
        self.entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v)))
            .collect()
    }
}

impl FromIterator<(DimensionKey, String)> for DimensionMapping {
    fn from_iter<I: IntoIterator<Item = (DimensionKey, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything a [`DimensionSource`] may read.
pub struct PageContext<'a> {
    pub page: &'a dyn Page,
    pub cookies: &'a dyn CookieJar,
    pub config: &'a TrackerConfig,
}

/// One independent extractor. Must not fail: anything it cannot read is
/// left out or replaced by its documented default.
pub trait DimensionSource {
    fn name(&self) -> &'static str;

    fn extract(&self, ctx: &PageContext<'_>) -> DimensionMapping;
}

/// Render a number the way the analytics platform expects: `2`, `1.5`,
/// `1e+21`, `1.5e-7`, `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // Positive exponents carry an explicit sign.
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    format!("{}", value)
}

/// Coerce a JSON value to a dimension string. `null` has no string form.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) => format_number(f),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}
