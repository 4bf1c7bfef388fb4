//! Permissive option sanitization.
//!
//! End users paste arbitrary option objects; this surface never rejects
//! them. Unknown ids are dropped, invalid values fall back to the schema
//! default, and the result always carries exactly the schema's ids.

use serde_json::{Map, Value};

use crate::options::schema::OptionSpec;

/// Validate user-supplied options against a schema.
///
/// Total: for any input value (object or not), the returned map's key set
/// equals the schema's id set, and every value is valid for its declared
/// type.
pub fn sanitize_options(user: &Value, schema: &[OptionSpec]) -> Map<String, Value> {
    let supplied = user.as_object();
    let mut result = Map::with_capacity(schema.len());
    for spec in schema {
        let value = match supplied.and_then(|map| map.get(&spec.id)) {
            Some(candidate) if spec.accepts(candidate) => candidate.clone(),
            _ => spec.default.clone(),
        };
        result.insert(spec.id.clone(), value);
    }
    result
}

/// Read a boolean from a sanitized map, with a fallback for ids the schema
/// does not declare.
pub fn bool_option(map: &Map<String, Value>, id: &str, fallback: bool) -> bool {
    map.get(id).and_then(Value::as_bool).unwrap_or(fallback)
}

/// Read a non-negative integer from a sanitized map.
pub fn integer_option(map: &Map<String, Value>, id: &str, fallback: u64) -> u64 {
    map.get(id)
        .and_then(Value::as_f64)
        .map(|n| n.max(0.0) as u64)
        .unwrap_or(fallback)
}

/// Read a string from a sanitized map.
pub fn string_option(map: &Map<String, Value>, id: &str, fallback: &str) -> String {
    map.get(id)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}
