use cookie::Cookie;
use dashmap::DashMap;
use std::sync::Arc;

/// Raw cookie access, as a page script sees `document.cookie`.
pub trait CookieJar {
    /// The cookie's value, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Create or replace a cookie.
    fn set(&self, name: &str, value: &str);

    /// Delete a cookie. Deleting a missing cookie is a no-op.
    fn remove(&self, name: &str);
}

impl<J: CookieJar + ?Sized> CookieJar for &J {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) {
        (**self).set(name, value)
    }

    fn remove(&self, name: &str) {
        (**self).remove(name)
    }
}

impl<J: CookieJar + ?Sized> CookieJar for Arc<J> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) {
        (**self).set(name, value)
    }

    fn remove(&self, name: &str) {
        (**self).remove(name)
    }
}

/// In-memory cookie jar for one browsing context.
///
/// Clones share the same storage, so a jar handed to a tracker can still be
/// inspected or carried to the next page by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    store: Arc<DashMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a jar from a `Cookie:` request header.
    ///
    /// Values are taken byte-for-byte as sent, surrounding quotes
    /// included; nothing is percent-decoded. Malformed pairs are skipped.
    pub fn from_cookie_header(header: &str) -> Self {
        let jar = Self::new();
        for parsed in Cookie::split_parse(header) {
            match parsed {
                Ok(c) => {
                    jar.store.insert(c.name().to_string(), c.value().to_string());
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed cookie pair");
                }
            }
        }
        jar
    }

    /// Render the jar as a `Cookie:` header value, raw and sorted by name.
    pub fn to_cookie_header(&self) -> String {
        let mut pairs: Vec<(String, String)> = self
            .store
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        pairs.sort();

        pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.store.get(name).map(|v| v.value().clone())
    }

    fn set(&self, name: &str, value: &str) {
        self.store.insert(name.to_string(), value.to_string());
    }

    fn remove(&self, name: &str) {
        self.store.remove(name);
    }
}
