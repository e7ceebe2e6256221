//! Layout engine
//!
//! Turns a canonical [`LessonRecord`] into a fixed-layout DOCX document:
//! one centered three-column table on an A4 page.
//!
//! Rendering is split in two steps. [`build_table`] produces a
//! [`LessonTable`] model (rows, merges, runs, borders); [`docx::write_docx`]
//! serializes that model. [`render`] does both.
//!
//! # Example
//!
//! ```rust
//! use lectern::core::canonical::canonicalize_record;
//! use lectern::core::layout::{build_table, render};
//! use serde_json::json;
//!
//! # fn example() -> lectern::domain::Result<()> {
//! let record = canonicalize_record(&json!({ "教学课题": "Unit 1" }));
//! assert_eq!(build_table(&record).row_count(), 13);
//!
//! let bytes = render(&record)?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod docx;
pub mod table;

pub use builder::TableBuilder;
pub use table::{LayoutCell, LayoutRow, LessonTable, RowKind};

use crate::domain::{LessonRecord, Result};

/// Extension of rendered documents
pub const DOCUMENT_EXTENSION: &str = "docx";

/// Fixed cell labels
pub mod labels {
    pub const TOPIC: &str = "教学课题";
    pub const OBJECTIVES: &str = "教学目标";
    pub const KEY_POINTS: &str = "教学重点与难点";
    pub const PREPARATION: &str = "教学准备";
    pub const FLOW_HEADER: &str = "教 · 学 · 流 · 程";
    pub const TEACHER_ACTIVITY: &str = "教师活动";
    pub const STUDENT_ACTIVITY: &str = "学生活动";
    pub const SECOND_PREPARATION: &str = "二次备课";
    pub const BOARD_DESIGN: &str = "板书设计";
    pub const REFLECTION: &str = "教学反思";
}

/// Table columns
pub const COLUMN_COUNT: usize = 3;

/// 3 cm blank for handwritten reflection
pub const REFLECTION_HEIGHT_TWIPS: u32 = 1701;

/// 10 pt, in half-points
pub const FONT_SIZE_HALF_POINTS: usize = 20;

pub const LATIN_FONT: &str = "Times New Roman";
pub const EAST_ASIAN_FONT: &str = "SimSun";

/// Border width in eighths of a point
pub const BORDER_SIZE: usize = 8;
pub const BORDER_COLOR: &str = "000000";

/// Page geometry in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub margin_left: i32,
    pub margin_right: i32,
}

impl PageSetup {
    /// Width between the left and right margins
    pub fn usable_width(&self) -> u32 {
        let margins = (self.margin_left + self.margin_right).max(0) as u32;
        self.width.saturating_sub(margins)
    }

    /// Equal grid column widths filling the usable width
    pub fn column_widths(&self) -> [usize; COLUMN_COUNT] {
        let total = self.usable_width() as usize;
        let base = total / COLUMN_COUNT;
        let mut widths = [base; COLUMN_COUNT];
        // Remainder goes to the leading columns
        for width in widths.iter_mut().take(total % COLUMN_COUNT) {
            *width += 1;
        }
        widths
    }
}

/// A4 with 2.54 cm top/bottom and 1.91 cm left/right margins
pub const A4_PAGE: PageSetup = PageSetup {
    width: 11906,
    height: 16838,
    margin_top: 1440,
    margin_bottom: 1440,
    margin_left: 1083,
    margin_right: 1083,
};

/// Builds the table model for a record
pub fn build_table(record: &LessonRecord) -> LessonTable {
    TableBuilder::new().build(record)
}

/// Renders a record to DOCX bytes
///
/// # Errors
///
/// Returns [`crate::domain::LecternError::Render`] if the document cannot
/// be packaged. The failure is final for this record.
pub fn render(record: &LessonRecord) -> Result<Vec<u8>> {
    let table = build_table(record);
    tracing::debug!(
        rows = table.row_count(),
        activities = record.activity_count(),
        "Rendering lesson table"
    );
    docx::write_docx(&table, &A4_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_usable_width() {
        assert_eq!(A4_PAGE.usable_width(), 9740);
    }

    #[test]
    fn test_column_widths_fill_usable_width() {
        let widths = A4_PAGE.column_widths();
        assert_eq!(widths.iter().sum::<usize>(), 9740);
        assert_eq!(widths, [3247, 3247, 3246]);
    }

    #[test]
    fn test_render_produces_zip_container() {
        let bytes = render(&LessonRecord::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
