use crate::base::analyticserror::AnalyticsError;
use crate::cookies::codec;
use crate::cookies::jar::CookieJar;
use serde_json::Value;

/// Typed, fail-soft access to JSON values kept in cookies.
#[derive(Debug, Clone)]
pub struct CookieStore<J> {
    jar: J,
}

impl<J: CookieJar> CookieStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Decoded value of `name`, or `None` when the cookie is missing or
    /// its payload does not decode.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.try_get(name) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(cookie = %name, error = %e, "treating undecodable cookie as absent");
                None
            }
        }
    }

    /// Like [`get`](Self::get) but reports why a present cookie was unreadable.
    pub fn try_get(&self, name: &str) -> Result<Option<Value>, AnalyticsError> {
        match self.jar.get(name) {
            Some(raw) => codec::decode_value(name, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Store `value` under `name`. `None` and JSON `null` delete the cookie.
    pub fn set(&self, name: &str, value: Option<&Value>) {
        match value {
            None | Some(Value::Null) => self.jar.remove(name),
            Some(value) => match codec::encode(name, value) {
                Ok(raw) => self.jar.set(name, &raw),
                Err(e) => {
                    tracing::warn!(cookie = %name, error = %e, "cookie value not stored");
                }
            },
        }
    }

    /// The cookie's value as stored, without decoding.
    pub fn get_raw(&self, name: &str) -> Option<String> {
        self.jar.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::jar::MemoryCookieJar;
    use serde_json::json;

    #[test]
    fn test_missing_cookie_is_absent() {
        let store = CookieStore::new(MemoryCookieJar::new());
        assert_eq!(store.get("analytics_next_page_call"), None);
        assert_eq!(store.try_get("analytics_next_page_call"), Ok(None));
    }

    #[test]
    fn test_set_then_get() {
        let store = CookieStore::new(MemoryCookieJar::new());
        store.set("c", Some(&json!({"a": 1})));
        assert_eq!(store.get("c"), Some(json!({"a": 1})));
        assert_eq!(store.get_raw("c").as_deref(), Some(r#""{\"a\":1}""#));
    }

    #[test]
    fn test_set_none_and_null_delete() {
        let jar = MemoryCookieJar::new();
        let store = CookieStore::new(jar.clone());

        store.set("c", Some(&json!({"a": 1})));
        store.set("c", None);
        assert!(!jar.contains("c"));

        store.set("c", Some(&json!({"a": 1})));
        store.set("c", Some(&Value::Null));
        assert!(!jar.contains("c"));
    }

    #[test]
    fn test_tampered_cookie_is_absent() {
        let jar = MemoryCookieJar::new();
        jar.set("c", "{\"a\":1");
        let store = CookieStore::new(jar);

        assert_eq!(store.get("c"), None);
        assert!(store.try_get("c").is_err());
    }
}
