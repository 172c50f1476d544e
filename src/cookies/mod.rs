//! Cookie access for the tracker.
//!
//! The tracker never owns the browser's cookies. It reads and writes them
//! through the [`CookieJar`](jar::CookieJar) capability, and layers a
//! JSON wire format on top:
//!
//! | Layer | Type | Responsibility |
//! |-------|------|----------------|
//! | Capability | [`CookieJar`](jar::CookieJar) | Raw name/value access |
//! | In-memory jar | [`MemoryCookieJar`](jar::MemoryCookieJar) | `Cookie:` header import/export |
//! | Wire format | [`codec`] | Double-encoded JSON payloads |
//! | Typed access | [`CookieStore`](store::CookieStore) | Fail-soft get/set of JSON values |
//!
//! # Wire format
//!
//! A stored value is the JSON serialisation of the value, serialised again
//! as a JSON string. `{"dimension5":"x"}` is stored as
//! `"{\"dimension5\":\"x\"}"` (quotes included). Reading reverses both
//! steps; any failure reads as "no value".
//!
//! ```rust
//! use pageanalytics::cookies::jar::MemoryCookieJar;
//! use pageanalytics::cookies::store::CookieStore;
//! use serde_json::json;
//!
//! let store = CookieStore::new(MemoryCookieJar::new());
//! store.set("analytics_next_page_call", Some(&json!({"dimension5": "x"})));
//! assert_eq!(store.get("analytics_next_page_call"), Some(json!({"dimension5": "x"})));
//! ```

pub mod codec;
pub mod jar;
pub mod store;
