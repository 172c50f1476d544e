//! Double-encoded JSON cookie payloads.
//!
//! `encode` serialises a value to JSON, then serialises that string as a
//! JSON string literal. `decode` parses twice. Both layers are part of the
//! wire format: the outer quoting keeps the payload escaped the same way
//! whichever cookie writer stored it.

use crate::base::analyticserror::AnalyticsError;
use crate::base::context::JsonResultExt;
use serde::Serialize;
use serde_json::{Map, Value};

/// Encode `value` for storage in the cookie named `cookie`.
pub fn encode<T: Serialize + ?Sized>(cookie: &str, value: &T) -> Result<String, AnalyticsError> {
    let inner = serde_json::to_string(value).encode_context(cookie)?;
    serde_json::to_string(&inner).encode_context(cookie)
}

/// Decode any JSON value from a double-encoded payload.
pub fn decode_value(cookie: &str, raw: &str) -> Result<Value, AnalyticsError> {
    let inner: String = serde_json::from_str(raw).decode_context(cookie)?;
    serde_json::from_str(&inner).decode_context(cookie)
}

/// Decode a double-encoded payload that must hold a JSON object.
pub fn decode(cookie: &str, raw: &str) -> Result<Map<String, Value>, AnalyticsError> {
    match decode_value(cookie, raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(AnalyticsError::cookie_not_object(cookie)),
    }
}
