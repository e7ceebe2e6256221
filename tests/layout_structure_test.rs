//! Integration tests for the lesson table layout
//!
//! Row structure is checked on the table model; the DOCX tests unpack the
//! archive and look at `word/document.xml`.

use lectern::core::canonical::canonicalize_record;
use lectern::core::layout::{build_table, render, RowKind, REFLECTION_HEIGHT_TWIPS};
use lectern::domain::{Activity, LessonRecord};
use regex::Regex;
use serde_json::{json, Value};
use std::io::{Cursor, Read};
use test_case::test_case;

fn document_xml(bytes: Vec<u8>) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

/// `<w:tcBorders>` contents of every cell, grouped by table row
fn cell_borders_by_row(xml: &str) -> Vec<Vec<String>> {
    let borders = Regex::new(r"(?s)<w:tcBorders>(.*?)</w:tcBorders>").unwrap();
    xml.split("</w:tr>")
        .filter(|chunk| chunk.contains("<w:tc>"))
        .map(|row| {
            borders
                .captures_iter(row)
                .map(|c| c[1].to_string())
                .collect()
        })
        .collect()
}

/// `w:val` of one edge in a cell's borders, if the edge is written
fn edge(cell: &str, name: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r#"<w:{name} w:val="([^"]+)""#)).unwrap();
    pattern.captures(cell).map(|c| c[1].to_string())
}

fn record_with_counts(counts: [usize; 5]) -> LessonRecord {
    let mut record = LessonRecord::default();
    for (section, count) in counts.iter().enumerate() {
        for i in 0..*count {
            record
                .add_activity(section, Activity::new(format!("t{i}"), format!("s{i}")))
                .unwrap();
        }
    }
    record
}

#[test_case([0, 0, 0, 0, 0]; "no activities")]
#[test_case([1, 0, 0, 0, 0]; "one activity")]
#[test_case([3, 0, 2, 0, 1]; "mixed")]
#[test_case([4, 4, 4, 4, 4]; "all full")]
fn test_row_count_formula(counts: [usize; 5]) {
    let table = build_table(&record_with_counts(counts));
    let flow_rows: usize = counts.iter().map(|c| (*c).max(1)).sum();

    assert_eq!(table.row_count(), 4 + 1 + 1 + flow_rows + 1 + 1);
    assert_eq!(table.flow_rows().count(), flow_rows);
    assert_eq!(table.rows_of(RowKind::Field).count(), 4);
    assert_eq!(table.rows_of(RowKind::FlowTitle).count(), 1);
    assert_eq!(table.rows_of(RowKind::ColumnHeader).count(), 1);
    assert_eq!(table.rows_of(RowKind::BoardDesign).count(), 1);

    let reflection: Vec<_> = table.rows_of(RowKind::Reflection).collect();
    assert_eq!(reflection.len(), 1);
    assert_eq!(reflection[0].exact_height, Some(REFLECTION_HEIGHT_TWIPS));
}

#[test]
fn test_empty_input_has_one_row_per_section() {
    let record = canonicalize_record(&json!({}));
    let table = build_table(&record);
    let sections: Vec<usize> = table
        .flow_rows()
        .map(|row| match row.kind {
            RowKind::Flow { section, number } => {
                assert_eq!(number, 0);
                section
            }
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(sections, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_labelled_section_rows_numbered_in_order() {
    let raw = json!({
        "教学流程": [
            { "AnythingLabel": [{ "tea": "T1", "stu": "S1" }, { "tea": "T2", "stu": "S2" }] }
        ]
    });
    let record = canonicalize_record(&raw);
    assert_eq!(
        record.flow()[0].activities(),
        &[Activity::new("T1", "S1"), Activity::new("T2", "S2")]
    );

    let table = build_table(&record);
    let rows: Vec<_> = table
        .flow_rows()
        .filter(|r| matches!(r.kind, RowKind::Flow { section: 0, .. }))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].cells[0].plain_text().ends_with("\n1. T1"));
    assert_eq!(rows[0].cells[1].plain_text(), "\n1. S1");
    assert_eq!(rows[1].cells[0].plain_text(), "2. T2");
    assert_eq!(rows[1].cells[1].plain_text(), "2. S2");
}

#[test]
fn test_numbering_contiguous_after_edits() {
    let mut record = record_with_counts([0, 5, 0, 0, 0]);
    record.remove_activity(1, 2).unwrap();
    record.remove_activity(1, 0).unwrap();

    let numbers: Vec<usize> = build_table(&record)
        .flow_rows()
        .filter_map(|r| match r.kind {
            RowKind::Flow { section: 1, number } => Some(number),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_table_stable_across_field_order() {
    let a: Value = serde_json::from_str(
        r#"{"教学课题":"U1","板书设计":"B","教学流程":[{"x":[{"tea":"a","stu":"b"}]}]}"#,
    )
    .unwrap();
    let b: Value = serde_json::from_str(
        r#"{"教学流程":[{"y":[{"stu":"b","tea":"a"}]}],"板书设计":"B","教学课题":"U1"}"#,
    )
    .unwrap();

    let table_a = build_table(&canonicalize_record(&a));
    let table_b = build_table(&canonicalize_record(&b));
    assert_eq!(table_a, table_b);
}

#[test]
fn test_render_through_persisted_form_is_stable() {
    let record = record_with_counts([2, 1, 0, 3, 0]);
    let persisted = record.to_value().unwrap();
    let reloaded = canonicalize_record(&persisted);

    assert_eq!(build_table(&record), build_table(&reloaded));
    assert_eq!(build_table(&reloaded).text_grid(), build_table(&reloaded).text_grid());
}

#[test]
fn test_rendered_document_contains_record_text() {
    let raw = json!({
        "教学课题": "Unit 4 Seasons",
        "教学目标": "Name the four seasons",
        "教学流程": [{ "x": [{ "tea": "Show pictures", "stu": "Say the words" }] }],
        "板书设计": "spring / summer"
    });
    let xml = document_xml(render(&canonicalize_record(&raw)).unwrap());

    for text in [
        "Unit 4 Seasons",
        "Name the four seasons",
        "1. Show pictures",
        "1. Say the words",
        "spring / summer",
        "教学反思",
    ] {
        assert!(xml.contains(text), "missing {text}");
    }
}

#[test]
fn test_render_is_a_single_table() {
    let xml = document_xml(render(&LessonRecord::default()).unwrap());
    assert_eq!(xml.matches("</w:tbl>").count(), 1);
}

#[test]
fn test_rendered_borders_follow_table_model() {
    // 4 fields, flow title, column header (5), flow rows 6..=11, board, reflection
    let record = record_with_counts([2, 0, 0, 0, 0]);
    let rows = cell_borders_by_row(&document_xml(render(&record).unwrap()));
    assert_eq!(rows.len(), 14);

    for cell in &rows[5] {
        assert_eq!(edge(cell, "bottom").as_deref(), Some("nil"));
    }
    for cell in &rows[6] {
        assert_ne!(edge(cell, "top").as_deref(), Some("single"));
    }
    for row in &rows[7..11] {
        for cell in row {
            assert_eq!(edge(cell, "top").as_deref(), Some("nil"));
            assert_eq!(edge(cell, "bottom").as_deref(), Some("nil"));
        }
    }
    for cell in rows.iter().flatten() {
        assert_eq!(edge(cell, "left").as_deref(), Some("single"));
        assert_eq!(edge(cell, "right").as_deref(), Some("single"));
        assert!(!cell.contains("insideH"));
        assert!(!cell.contains("insideV"));
    }

    // Board design row has no cell-level rule above it
    for cell in &rows[12] {
        assert_eq!(edge(cell, "top"), None);
    }
    for cell in &rows[0] {
        assert_eq!(edge(cell, "top").as_deref(), Some("single"));
    }
    for cell in &rows[13] {
        assert_eq!(edge(cell, "bottom").as_deref(), Some("single"));
    }
}
