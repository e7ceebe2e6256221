//! Integration tests for record canonicalization
//!
//! Any JSON value canonicalizes to five fixed sections; activities keep
//! their order through edits.

use lectern::core::canonical::{canonical_document, canonicalize, canonicalize_record};
use lectern::domain::{Activity, LessonRecord, MoveDirection, FIXED_TITLES, SECTION_COUNT};
use serde_json::{json, Value};
use test_case::test_case;

#[test_case(json!(null); "null")]
#[test_case(json!({}); "empty object")]
#[test_case(json!([1, 2, 3]); "array")]
#[test_case(json!("text"); "string")]
#[test_case(json!(42); "number")]
#[test_case(json!({ "教学流程": null }); "null flow")]
#[test_case(json!({ "教学流程": "nope" }); "string flow")]
#[test_case(json!({ "教学流程": [] }); "empty flow")]
#[test_case(json!({ "教学流程": [{}] }); "empty section object")]
#[test_case(json!({ "教学流程": [{ "a": "not a list" }, 7, null] }); "wrong section types")]
#[test_case(json!({ "教学流程": vec![json!({ "x": [] }); 12] }); "oversized flow")]
fn test_canonicalize_always_yields_fixed_sections(raw: Value) {
    let flow = canonicalize(&raw);
    assert_eq!(flow.len(), SECTION_COUNT);
    for (section, title) in flow.iter().zip(FIXED_TITLES) {
        assert_eq!(section.title(), title);
    }
}

#[test_case(json!({}), "", ""; "both missing")]
#[test_case(json!({ "tea": "T" }), "T", ""; "student missing")]
#[test_case(json!({ "stu": "S" }), "", "S"; "teacher missing")]
#[test_case(json!({ "tea": null, "stu": null }), "", ""; "nulls")]
#[test_case(json!({ "teacherAction": "T", "studentAction": "S" }), "T", "S"; "english keys")]
#[test_case(json!({ "tea": 3, "stu": true }), "3", "true"; "non-string values")]
fn test_activity_coercion(item: Value, teacher: &str, student: &str) {
    let raw = json!({ "教学流程": [{ "any": [item] }] });
    let flow = canonicalize(&raw);
    assert_eq!(flow[0].activities(), &[Activity::new(teacher, student)]);
}

#[test]
fn test_non_object_activities_dropped() {
    let raw = json!({ "教学流程": [{ "any": ["text", 1, null, { "tea": "kept" }] }] });
    let flow = canonicalize(&raw);
    assert_eq!(flow[0].activities(), &[Activity::new("kept", "")]);
}

#[test]
fn test_order_preserved_through_canonicalization() {
    let items: Vec<Value> = (1..=6).map(|i| json!({ "tea": format!("T{i}") })).collect();
    let raw = json!({ "教学流程": [{}, { "label": items }] });
    let record = canonicalize_record(&raw);

    let texts: Vec<&str> = record.flow()[1]
        .activities()
        .iter()
        .map(|a| a.teacher_action.as_str())
        .collect();
    assert_eq!(texts, vec!["T1", "T2", "T3", "T4", "T5", "T6"]);
}

#[test]
fn test_order_preserved_through_edits() {
    let mut record = LessonRecord::default();
    for name in ["a", "b", "c", "d"] {
        record.add_activity(4, Activity::new(name, "")).unwrap();
    }

    record.move_activity(4, 3, MoveDirection::Up).unwrap(); // a b d c
    record.remove_activity(4, 0).unwrap(); // b d c
    record.add_activity(4, Activity::new("e", "")).unwrap(); // b d c e
    record.move_activity(4, 0, MoveDirection::Down).unwrap(); // d b c e

    let texts: Vec<&str> = record.flow()[4]
        .activities()
        .iter()
        .map(|a| a.teacher_action.as_str())
        .collect();
    assert_eq!(texts, vec!["d", "b", "c", "e"]);
}

#[test]
fn test_canonical_document_round_trips() {
    let raw = json!({
        "教学课题": "Unit 3",
        "extra": { "kept": true },
        "教学流程": [{ "x": [{ "tea": "a", "stu": "b" }] }]
    });
    let once = canonical_document(&raw);
    let twice = canonical_document(&once);
    assert_eq!(once, twice);
    assert_eq!(canonicalize_record(&once), canonicalize_record(&raw));
}

#[test]
fn test_reflection_always_persisted_empty() {
    let raw = json!({ "教学反思": "written by hand" });
    let value = canonicalize_record(&raw).to_value().unwrap();
    assert_eq!(value["教学反思"], "");
}
