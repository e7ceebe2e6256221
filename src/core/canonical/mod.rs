//! Record canonicalization
//!
//! Coerces arbitrary JSON into the fixed five-section shape. Every function
//! here is total: malformed input degrades to empty text and empty sections,
//! so a corrupted library file can still be rendered.
//!
//! Section content is located by *position*: the activity list of section
//! `i` is the value of the first entry of the `i`-th flow object, whatever
//! its key says. Titles always come from [`crate::domain::FIXED_TITLES`].

pub mod coerce;

use crate::domain::lesson::{empty_flow, keys, FlowSection};
use crate::domain::{Activity, LessonRecord, SECTION_COUNT};
use coerce::{action_text, field_text, lookup};
use serde_json::{Map, Value};

/// Canonicalizes the flow field of a raw record.
///
/// # Examples
///
/// ```
/// use lectern::core::canonical::canonicalize;
/// use serde_json::json;
///
/// let flow = canonicalize(&json!({
///     "教学流程": [{ "Any label": [{ "tea": "T1", "stu": "S1" }, "dropped"] }]
/// }));
/// assert_eq!(flow.len(), 5);
/// assert_eq!(flow[0].activities().len(), 1);
/// assert!(flow[1].is_empty());
/// ```
pub fn canonicalize(raw: &Value) -> [FlowSection; SECTION_COUNT] {
    let entries = raw
        .as_object()
        .and_then(|obj| lookup(obj, keys::FLOW, keys::FLOW_ALIAS))
        .and_then(Value::as_array);

    let Some(entries) = entries else {
        return empty_flow();
    };

    std::array::from_fn(|i| FlowSection::new(i, section_activities(entries.get(i))))
}

/// Canonicalizes a whole record: text fields plus flow
pub fn canonicalize_record(raw: &Value) -> LessonRecord {
    let mut record = LessonRecord::with_flow(canonicalize(raw));

    if let Some(obj) = raw.as_object() {
        record.topic = field_text(lookup(obj, keys::TOPIC, keys::TOPIC_ALIAS));
        record.objectives = field_text(lookup(obj, keys::OBJECTIVES, keys::OBJECTIVES_ALIAS));
        record.key_points_and_difficulties =
            field_text(lookup(obj, keys::KEY_POINTS, keys::KEY_POINTS_ALIAS));
        record.preparation = field_text(lookup(obj, keys::PREPARATION, keys::PREPARATION_ALIAS));
        record.board_design =
            field_text(lookup(obj, keys::BOARD_DESIGN, keys::BOARD_DESIGN_ALIAS));
    }

    record
}

/// Returns `raw` with only its flow replaced by the canonical flow.
///
/// Unknown keys survive untouched; this is the document an editor is seeded
/// with. A non-object input yields an object holding just the flow.
pub fn canonical_document(raw: &Value) -> Value {
    document_with_flow(raw, &canonicalize(raw))
}

/// Returns `raw` with its flow replaced by `flow`.
///
/// Used to write an edited record back without losing keys the model does
/// not know about.
pub fn document_with_flow(raw: &Value, flow: &[FlowSection; SECTION_COUNT]) -> Value {
    let flow: Vec<Value> = flow.iter().map(section_value).collect();

    let mut object = match raw {
        Value::Object(obj) => obj.clone(),
        _ => Map::new(),
    };
    // Drop the alias so the flow appears once
    object.remove(keys::FLOW_ALIAS);
    object.insert(keys::FLOW.to_string(), Value::Array(flow));
    Value::Object(object)
}

fn section_value(section: &FlowSection) -> Value {
    let activities = section
        .activities()
        .iter()
        .map(|a| {
            let mut obj = Map::new();
            obj.insert(keys::TEACHER_ACTION.to_string(), Value::String(a.teacher_action.clone()));
            obj.insert(keys::STUDENT_ACTION.to_string(), Value::String(a.student_action.clone()));
            Value::Object(obj)
        })
        .collect();

    let mut obj = Map::new();
    obj.insert(section.title().to_string(), Value::Array(activities));
    Value::Object(obj)
}

fn section_activities(entry: Option<&Value>) -> Vec<Activity> {
    // Positional access: the first value of the entry, key ignored
    let candidate = entry
        .and_then(Value::as_object)
        .and_then(|obj| obj.values().next())
        .and_then(Value::as_array);

    match candidate {
        Some(items) => items.iter().filter_map(coerce_activity).collect(),
        None => Vec::new(),
    }
}

fn coerce_activity(item: &Value) -> Option<Activity> {
    let obj = item.as_object()?;
    Some(Activity {
        teacher_action: action_text(lookup(
            obj,
            keys::TEACHER_ACTION,
            keys::TEACHER_ACTION_ALIAS,
        )),
        student_action: action_text(lookup(
            obj,
            keys::STUDENT_ACTION,
            keys::STUDENT_ACTION_ALIAS,
        )),
    })
}
