//! Tracking options deferred to the next pageview.
//!
//! A page that is about to navigate (a form submit, a redirect) can stash
//! options here. The next page's [`Tracker`](crate::tracker::Tracker)
//! consumes them once, before its initial pageview, and clears the cookie
//! so a third page never sees them.

use crate::config::NEXT_PAGE_CALL_COOKIE;
use crate::cookies::jar::CookieJar;
use crate::cookies::store::CookieStore;
use serde_json::{Map, Value};

/// Flat mapping of option names (usually `dimension<N>`) to values.
pub type TrackingOptions = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct DeferredOptionsChannel<J> {
    store: CookieStore<J>,
    cookie_name: String,
}

impl<J: CookieJar> DeferredOptionsChannel<J> {
    pub fn new(jar: J) -> Self {
        Self::with_cookie_name(jar, NEXT_PAGE_CALL_COOKIE)
    }

    pub fn with_cookie_name(jar: J, cookie_name: impl Into<String>) -> Self {
        Self {
            store: CookieStore::new(jar),
            cookie_name: cookie_name.into(),
        }
    }

    pub fn store(&self) -> &CookieStore<J> {
        &self.store
    }

    /// Merge `options` over anything already stashed; new keys win.
    ///
    /// Anything other than a JSON object is ignored.
    pub fn stash_for_next_pageview(&self, options: &Value) {
        let Value::Object(options) = options else {
            tracing::debug!(cookie = %self.cookie_name, "ignoring non-object deferred options");
            return;
        };

        let mut stashed = self.peek();
        stashed.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.store
            .set(&self.cookie_name, Some(&Value::Object(stashed)));
    }

    /// Read the stashed options and clear the cookie.
    ///
    /// A missing or corrupt cookie yields an empty mapping. A second call in
    /// the same page load always yields an empty mapping.
    pub fn consume_stashed(&self) -> TrackingOptions {
        let stashed = self.peek();
        self.store.set(&self.cookie_name, None);
        tracing::debug!(
            cookie = %self.cookie_name,
            count = stashed.len(),
            "consumed deferred tracking options"
        );
        stashed
    }

    /// The stashed options without clearing them.
    pub fn peek(&self) -> TrackingOptions {
        match self.store.get(&self.cookie_name) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::jar::MemoryCookieJar;
    use serde_json::json;

    fn options(value: Value) -> TrackingOptions {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_consume_is_exactly_once() {
        let channel = DeferredOptionsChannel::new(MemoryCookieJar::new());
        channel.stash_for_next_pageview(&json!({"dimension5": "x"}));

        assert_eq!(channel.consume_stashed(), options(json!({"dimension5": "x"})));
        assert!(channel.consume_stashed().is_empty());
    }

    #[test]
    fn test_stash_accumulates() {
        let channel = DeferredOptionsChannel::new(MemoryCookieJar::new());
        channel.stash_for_next_pageview(&json!({"a": 1}));
        channel.stash_for_next_pageview(&json!({"b": 2}));

        assert_eq!(channel.consume_stashed(), options(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_later_stash_wins_on_collision() {
        let channel = DeferredOptionsChannel::new(MemoryCookieJar::new());
        channel.stash_for_next_pageview(&json!({"a": 1, "b": 1}));
        channel.stash_for_next_pageview(&json!({"a": 2}));

        assert_eq!(channel.peek(), options(json!({"a": 2, "b": 1})));
    }

    #[test]
    fn test_non_object_is_ignored() {
        let jar = MemoryCookieJar::new();
        let channel = DeferredOptionsChannel::new(jar.clone());

        channel.stash_for_next_pageview(&json!("dimension5"));
        channel.stash_for_next_pageview(&json!(42));
        channel.stash_for_next_pageview(&json!([1]));
        channel.stash_for_next_pageview(&Value::Null);

        assert!(jar.is_empty());
    }

    #[test]
    fn test_corrupt_cookie_consumes_as_empty_and_clears() {
        let jar = MemoryCookieJar::new();
        jar.set(NEXT_PAGE_CALL_COOKIE, "not json at all");
        let channel = DeferredOptionsChannel::new(jar.clone());

        assert!(channel.consume_stashed().is_empty());
        assert!(!jar.contains(NEXT_PAGE_CALL_COOKIE));
    }

    #[test]
    fn test_stash_over_corrupt_cookie_replaces_it() {
        let jar = MemoryCookieJar::new();
        jar.set(NEXT_PAGE_CALL_COOKIE, "\"[1,2\"");
        let channel = DeferredOptionsChannel::new(jar);

        channel.stash_for_next_pageview(&json!({"a": 1}));
        assert_eq!(channel.peek(), options(json!({"a": 1})));
    }

    #[test]
    fn test_custom_cookie_name() {
        let jar = MemoryCookieJar::new();
        let channel = DeferredOptionsChannel::with_cookie_name(jar.clone(), "next_call");
        channel.stash_for_next_pageview(&json!({"a": 1}));

        assert!(jar.contains("next_call"));
        assert!(!jar.contains(NEXT_PAGE_CALL_COOKIE));
    }
}
