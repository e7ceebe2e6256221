//! Lesson table builder
//!
//! Builds the fixed table top to bottom. A builder is consumed by
//! [`TableBuilder::build`], so no state leaks between records.

use super::labels;
use super::table::{
    BorderStyle, LayoutCell, LayoutRow, LessonTable, RowKind, Span,
};
use super::REFLECTION_HEIGHT_TWIPS;
use crate::domain::{FlowSection, LessonRecord};

/// Single-use builder for one record's table
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: Vec<LayoutRow>,
    column_header_row: Option<usize>,
    first_flow_row: Option<usize>,
    last_flow_row: Option<usize>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `record` and applies the border policy
    pub fn build(mut self, record: &LessonRecord) -> LessonTable {
        self.push_field(labels::TOPIC, &record.topic, true);
        self.push_field(labels::OBJECTIVES, &record.objectives, false);
        self.push_field(labels::KEY_POINTS, &record.key_points_and_difficulties, false);
        self.push_field(labels::PREPARATION, &record.preparation, false);

        self.push(LayoutRow::new(
            RowKind::FlowTitle,
            vec![LayoutCell::label(labels::FLOW_HEADER).spanning(3)],
        ));

        self.column_header_row = Some(self.push(LayoutRow::new(
            RowKind::ColumnHeader,
            vec![
                LayoutCell::label(labels::TEACHER_ACTIVITY),
                LayoutCell::label(labels::STUDENT_ACTIVITY),
                LayoutCell::label(labels::SECOND_PREPARATION),
            ],
        )));

        for (index, section) in record.flow().iter().enumerate() {
            self.push_section(index, section);
        }

        self.push(LayoutRow::new(
            RowKind::BoardDesign,
            vec![
                LayoutCell::label(labels::BOARD_DESIGN),
                LayoutCell::text(record.board_design.as_str()).spanning(2),
            ],
        ));

        let mut reflection = LayoutRow::new(
            RowKind::Reflection,
            vec![
                LayoutCell::label(labels::REFLECTION),
                LayoutCell::text(record.reflection()).spanning(2),
            ],
        );
        reflection.exact_height = Some(REFLECTION_HEIGHT_TWIPS);
        self.push(reflection);

        self.apply_borders();
        LessonTable { rows: self.rows }
    }

    fn push(&mut self, row: LayoutRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    fn push_field(&mut self, label: &str, value: &str, bold_value: bool) {
        let mut value_cell = LayoutCell::text(value).spanning(2).middle();
        if bold_value {
            value_cell = value_cell.emboldened();
        }
        self.push(LayoutRow::new(
            RowKind::Field,
            vec![LayoutCell::label(label), value_cell],
        ));
    }

    fn push_section(&mut self, index: usize, section: &FlowSection) {
        let activities = section.activities();

        // Title row carries the first activity, if any
        let mut title_spans = vec![Span::bold(section.title()), Span::plain("\n")];
        let student_cell = match activities.first() {
            Some(first) => {
                title_spans.push(Span::plain(format!("1. {}", first.teacher_action)));
                LayoutCell::text(format!("\n1. {}", first.student_action))
            }
            None => LayoutCell::empty(),
        };
        let number = if activities.is_empty() { 0 } else { 1 };
        let row = self.push(LayoutRow::new(
            RowKind::Flow {
                section: index,
                number,
            },
            vec![LayoutCell::new(title_spans), student_cell, LayoutCell::empty()],
        ));
        self.first_flow_row.get_or_insert(row);
        self.last_flow_row = Some(row);

        for (offset, activity) in activities.iter().enumerate().skip(1) {
            let number = offset + 1;
            let row = self.push(LayoutRow::new(
                RowKind::Flow {
                    section: index,
                    number,
                },
                vec![
                    LayoutCell::text(format!("{number}. {}", activity.teacher_action)),
                    LayoutCell::text(format!("{number}. {}", activity.student_action)),
                    LayoutCell::empty(),
                ],
            ));
            self.last_flow_row = Some(row);
        }
    }

    /// Outer frame and vertical rules everywhere; horizontal rules
    /// suppressed below the column header and inside the flow block.
    fn apply_borders(&mut self) {
        for row in &mut self.rows {
            for cell in &mut row.cells {
                cell.borders.left = Some(BorderStyle::Single);
                cell.borders.right = Some(BorderStyle::Single);
            }
        }

        if let Some(header) = self.column_header_row {
            for cell in &mut self.rows[header].cells {
                cell.borders.bottom = Some(BorderStyle::Nil);
            }
        }

        if let (Some(first), Some(last)) = (self.first_flow_row, self.last_flow_row) {
            for r in first..last {
                for cell in &mut self.rows[r].cells {
                    cell.borders.bottom = Some(BorderStyle::Nil);
                }
                for cell in &mut self.rows[r + 1].cells {
                    cell.borders.top = Some(BorderStyle::Nil);
                }
            }
        }

        if let Some(first) = self.rows.first_mut() {
            for cell in &mut first.cells {
                cell.borders.top = Some(BorderStyle::Single);
            }
        }
        if let Some(last) = self.rows.last_mut() {
            for cell in &mut last.cells {
                cell.borders.bottom = Some(BorderStyle::Single);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::table::{HAlign, VAlign};
    use crate::domain::Activity;

    fn build(record: &LessonRecord) -> LessonTable {
        TableBuilder::new().build(record)
    }

    #[test]
    fn test_empty_record_row_layout() {
        let table = build(&LessonRecord::default());
        // 4 fields + flow title + column header + 5 sections + board + reflection
        assert_eq!(table.row_count(), 13);
        assert_eq!(table.flow_rows().count(), 5);
        assert!(table.rows.iter().all(|r| r.width_in_columns() == 3));
    }

    #[test]
    fn test_field_rows() {
        let mut record = LessonRecord::default();
        record.topic = "Unit 1".to_string();
        record.objectives = "Learn words".to_string();
        let table = build(&record);

        let topic = &table.rows[0];
        assert_eq!(topic.kind, RowKind::Field);
        assert_eq!(topic.cells[0].plain_text(), labels::TOPIC);
        assert_eq!(topic.cells[0].h_align, HAlign::Center);
        assert_eq!(topic.cells[1].grid_span, 2);
        assert_eq!(topic.cells[1].v_align, VAlign::Center);
        assert!(topic.cells[1].spans.iter().all(|s| s.bold));

        let objectives = &table.rows[1];
        assert_eq!(objectives.cells[1].plain_text(), "Learn words");
        assert!(objectives.cells[1].spans.iter().all(|s| !s.bold));
    }

    #[test]
    fn test_section_title_row_without_activities() {
        let table = build(&LessonRecord::default());
        let row = table.flow_rows().next().unwrap();
        assert_eq!(row.cells[0].spans[0], Span::bold("I.Warming up and Revision"));
        assert_eq!(row.cells[0].plain_text(), "I.Warming up and Revision\n");
        assert_eq!(row.cells[1].plain_text(), "");
        assert_eq!(row.cells[2].plain_text(), "");
    }

    #[test]
    fn test_section_rows_numbered() {
        let mut record = LessonRecord::default();
        record.add_activity(2, Activity::new("T1", "S1")).unwrap();
        record.add_activity(2, Activity::new("T2", "S2")).unwrap();
        record.add_activity(2, Activity::new("T3", "S3")).unwrap();
        let table = build(&record);

        let rows: Vec<&LayoutRow> = table
            .flow_rows()
            .filter(|r| matches!(r.kind, RowKind::Flow { section: 2, .. }))
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].cells[0].plain_text(),
            "Ⅲ. Listening & reading Activities\n1. T1"
        );
        assert_eq!(rows[0].cells[1].plain_text(), "\n1. S1");
        assert_eq!(rows[1].cells[0].plain_text(), "2. T2");
        assert_eq!(rows[2].cells[1].plain_text(), "3. S3");
    }

    #[test]
    fn test_border_policy() {
        let mut record = LessonRecord::default();
        record.add_activity(0, Activity::new("a", "b")).unwrap();
        record.add_activity(0, Activity::new("c", "d")).unwrap();
        let table = build(&record);
        let last = table.row_count() - 1;

        for row in &table.rows {
            for cell in &row.cells {
                assert_eq!(cell.borders.left, Some(BorderStyle::Single));
                assert_eq!(cell.borders.right, Some(BorderStyle::Single));
            }
        }
        assert!(table.rows[0]
            .cells
            .iter()
            .all(|c| c.borders.top == Some(BorderStyle::Single)));
        assert!(table.rows[last]
            .cells
            .iter()
            .all(|c| c.borders.bottom == Some(BorderStyle::Single)));
        assert!(table.rows[5]
            .cells
            .iter()
            .all(|c| c.borders.bottom == Some(BorderStyle::Nil)));

        // Flow rows occupy 6..=11 (2 + 4 empty sections)
        for r in 6..11 {
            assert!(table.rows[r]
                .cells
                .iter()
                .all(|c| c.borders.bottom == Some(BorderStyle::Nil)));
            assert!(table.rows[r + 1]
                .cells
                .iter()
                .all(|c| c.borders.top == Some(BorderStyle::Nil)));
        }
        // Board design row keeps the style's rule above it
        assert_eq!(table.rows[11].cells[0].borders.bottom, None);
        assert_eq!(table.rows[12].cells[0].borders.top, None);
    }

    #[test]
    fn test_reflection_row_fixed_height() {
        let table = build(&LessonRecord::default());
        let row = table.rows.last().unwrap();
        assert_eq!(row.kind, RowKind::Reflection);
        assert_eq!(row.exact_height, Some(REFLECTION_HEIGHT_TWIPS));
        assert_eq!(row.cells[1].plain_text(), "");
        assert!(table.rows[..table.row_count() - 1]
            .iter()
            .all(|r| r.exact_height.is_none()));
    }
}
