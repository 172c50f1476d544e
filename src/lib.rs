//! # pageanalytics
//!
//! Page-level instrumentation for a publishing site's web analytics.
//!
//! `pageanalytics` builds the custom-dimension mapping sent with every
//! pageview and event, and carries tracking options across a navigation in
//! a single short-lived cookie. Delivery is left to an
//! [`AnalyticsClient`](tracker::AnalyticsClient); the document and the
//! browser's cookies are reached through the [`Page`](page::Page) and
//! [`CookieJar`](cookies::jar::CookieJar) capabilities.
//!
//! ## Features
//!
//! - **Dimension aggregation**: browser signals, `govuk:*` meta tags, DOM
//!   section counts and A/B assignments, merged in a fixed order
//! - **Deferred options**: stash options on one page, apply them to the
//!   next page's initial pageview exactly once
//! - **Fail-soft cookies**: a missing or tampered cookie reads as absent
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pageanalytics::cookies::jar::MemoryCookieJar;
//! use pageanalytics::page::staticpage::StaticPage;
//! use pageanalytics::tracker::Tracker;
//!
//! let page = StaticPage::builder()
//!     .meta("govuk:format", "guide")
//!     .build();
//! let mut tracker = Tracker::new(client, page, MemoryCookieJar::new());
//! tracker.track_event("accordion", "opened", None);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types
//! - [`config`] - Cookie names, prefixes and the A/B band
//! - [`cookies`] - Cookie capability, wire format and typed store
//! - [`deferred`] - Options deferred to the next pageview
//! - [`dimensions`] - Dimension sources and the aggregator
//! - [`page`] - Document capability
//! - [`tracker`] - The tracker and its client contract

pub mod base;
pub mod config;
pub mod cookies;
pub mod deferred;
pub mod dimensions;
pub mod page;
pub mod tracker;
