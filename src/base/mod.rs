//! Base types and error handling.
//!
//! - [`AnalyticsError`](analyticserror::AnalyticsError): the single error type of the crate
//! - [`JsonResultExt`](context::JsonResultExt): context helpers for `serde_json` results

pub mod analyticserror;
pub mod context;
