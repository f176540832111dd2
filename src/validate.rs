//! Structural validation of API payloads
//!
//! Each endpoint has a predicate that checks a decoded JSON value against
//! the shape the endpoint is documented to return: required fields present
//! and of the right JSON type. The predicates are pure and never inspect
//! field contents, so unknown extra fields pass and value-level problems
//! (an unparseable timestamp, an unknown country code) are left to later
//! layers.

use serde_json::{Map, Value};

fn has_string(obj: &Map<String, Value>, key: &str) -> bool {
    matches!(obj.get(key), Some(Value::String(_)))
}

fn has_string_array(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Array(items)) => items.iter().all(Value::is_string),
        _ => false,
    }
}

/// Whether `value` has the shape of a basic IP lookup payload.
pub fn is_ip_response(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) => has_string(obj, "ip") && has_string(obj, "country"),
        None => false,
    }
}

/// Whether `value` has the shape of a detailed IP lookup payload.
pub fn is_ip_details_response(value: &Value) -> bool {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return false,
    };

    has_string(obj, "ip")
        && has_string(obj, "userAgent")
        && has_string(obj, "asn")
        && has_string(obj, "country")
        && has_string(obj, "currency")
        && has_string_array(obj, "languages")
        && has_string(obj, "timestamp")
        && has_string(obj, "version")
}

/// Whether `value` has the shape of an SDK versions payload.
pub fn is_sdk_versions_response(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) => has_string(obj, "javascript") && has_string(obj, "python"),
        None => false,
    }
}
