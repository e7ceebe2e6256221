//! Value-to-text coercion rules
//!
//! Record files are hand-edited and come from older tool versions, so any
//! JSON value can show up where text is expected. These helpers never fail.

use serde_json::{Map, Value};

/// Coerces a top-level text field.
///
/// Missing and "empty-ish" values (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// become `""`. Strings pass through; anything else is rendered as compact
/// JSON.
pub fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Array(a)) if a.is_empty() => String::new(),
        Some(Value::Object(o)) if o.is_empty() => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Coerces one activity action.
///
/// Only absence and `null` map to `""`; `0` or `false` are kept as text.
pub fn action_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Looks a field up under its persisted key, then under its alias
pub fn lookup<'a>(object: &'a Map<String, Value>, key: &str, alias: &str) -> Option<&'a Value> {
    object.get(key).or_else(|| object.get(alias))
}
