//! SHA-256 fingerprints over sorted-key JSON

use crate::domain::{LessonRecord, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Fingerprints a JSON value
///
/// Object keys are sorted recursively before hashing, so two values that
/// differ only in key order share a fingerprint.
///
/// # Examples
///
/// ```
/// use lectern::core::verification::fingerprint;
/// use serde_json::json;
///
/// let a = fingerprint(&json!({ "tea": "T", "stu": "S" })).unwrap();
/// let b = fingerprint(&json!({ "stu": "S", "tea": "T" })).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn fingerprint(value: &Value) -> Result<String> {
    let text = serde_json::to_string(&sorted(value))?;
    Ok(fingerprint_bytes(text.as_bytes()))
}

/// Fingerprints the canonical form of a record
pub fn fingerprint_record(record: &LessonRecord) -> Result<String> {
    fingerprint(&record.to_value()?)
}

/// Hex SHA-256 of raw bytes
pub fn fingerprint_bytes(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    format!("{digest:x}")
}

fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, sorted(v))).collect();
            Value::Object(ordered.into_iter().map(|(k, v)| (k.clone(), v)).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        _ => value.clone(),
    }
}
