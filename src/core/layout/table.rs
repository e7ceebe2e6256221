//! Table model
//!
//! A plain description of the lesson table: rows, merged cells, runs,
//! alignment and per-cell borders. The DOCX writer only translates this
//! model, so every layout rule can be checked here without unpacking a
//! document.

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
}

/// Vertical cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
}

/// Border edge style; an unset edge falls back to the table style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Single,
    Nil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellBorders {
    pub top: Option<BorderStyle>,
    pub bottom: Option<BorderStyle>,
    pub left: Option<BorderStyle>,
    pub right: Option<BorderStyle>,
}

/// A text run. `\n` inside `text` is a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One table cell (one paragraph of runs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCell {
    pub spans: Vec<Span>,
    /// Number of grid columns covered
    pub grid_span: usize,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub borders: CellBorders,
}

impl LayoutCell {
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            grid_span: 1,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            borders: CellBorders::default(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::empty()
        } else {
            Self::new(vec![Span::plain(text)])
        }
    }

    /// Bold, centered both ways
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(vec![Span::bold(text)]).centered()
    }

    pub fn spanning(mut self, columns: usize) -> Self {
        self.grid_span = columns;
        self
    }

    pub fn centered(mut self) -> Self {
        self.h_align = HAlign::Center;
        self.v_align = VAlign::Center;
        self
    }

    pub fn middle(mut self) -> Self {
        self.v_align = VAlign::Center;
        self
    }

    pub fn emboldened(mut self) -> Self {
        for span in &mut self.spans {
            span.bold = true;
        }
        self
    }

    /// Concatenated run text
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// What a row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Field,
    FlowTitle,
    ColumnHeader,
    /// Flow content row; `number` is the 1-based activity number it opens
    /// with (0 for a section without activities)
    Flow { section: usize, number: usize },
    BoardDesign,
    Reflection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub kind: RowKind,
    pub cells: Vec<LayoutCell>,
    /// Exact row height in twips, when fixed
    pub exact_height: Option<u32>,
}

impl LayoutRow {
    pub fn new(kind: RowKind, cells: Vec<LayoutCell>) -> Self {
        Self {
            kind,
            cells,
            exact_height: None,
        }
    }

    pub fn is_flow(&self) -> bool {
        matches!(self.kind, RowKind::Flow { .. })
    }

    /// Grid columns covered by all cells
    pub fn width_in_columns(&self) -> usize {
        self.cells.iter().map(|c| c.grid_span).sum()
    }
}

/// The complete lesson table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTable {
    pub rows: Vec<LayoutRow>,
}

impl LessonTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn flow_rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(|r| r.is_flow())
    }

    pub fn rows_of(&self, kind: RowKind) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }

    /// Cell texts row by row, for structural comparison
    pub fn text_grid(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.cells.iter().map(LayoutCell::plain_text).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_cell() {
        let cell = LayoutCell::label("教学目标");
        assert_eq!(cell.h_align, HAlign::Center);
        assert_eq!(cell.v_align, VAlign::Center);
        assert!(cell.spans.iter().all(|s| s.bold));
        assert_eq!(cell.plain_text(), "教学目标");
    }

    #[test]
    fn test_text_cell_empty_has_no_runs() {
        assert!(LayoutCell::text("").spans.is_empty());
        assert_eq!(LayoutCell::text("x").spans.len(), 1);
    }

    #[test]
    fn test_emboldened() {
        let cell = LayoutCell::new(vec![Span::plain("a"), Span::plain("b")]).emboldened();
        assert!(cell.spans.iter().all(|s| s.bold));
    }

    #[test]
    fn test_row_width() {
        let row = LayoutRow::new(
            RowKind::Field,
            vec![LayoutCell::empty(), LayoutCell::empty().spanning(2)],
        );
        assert_eq!(row.width_in_columns(), 3);
        assert!(!row.is_flow());
    }
}
