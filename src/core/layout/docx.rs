//! DOCX serialization of the table model

use super::table::{BorderStyle, CellBorders, HAlign, LayoutCell, LayoutRow, LessonTable, Span, VAlign};
use super::{
    PageSetup, BORDER_COLOR, BORDER_SIZE, EAST_ASIAN_FONT, FONT_SIZE_HALF_POINTS, LATIN_FONT,
};
use crate::domain::{LecternError, Result};
use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, HeightRule, PageMargin, Paragraph, Run, RunFonts,
    Table, TableAlignmentType, TableCell, TableCellBorder, TableCellBorderPosition,
    TableCellBorders, TableLayoutType, TableRow, VAlignType, WidthType,
};
use std::io::Cursor;

/// Writes `table` on a single page section and packs the document
pub fn write_docx(table: &LessonTable, page: &PageSetup) -> Result<Vec<u8>> {
    let grid = page.column_widths().to_vec();

    let rows = table
        .rows
        .iter()
        .map(|row| docx_row(row, &grid))
        .collect::<Vec<_>>();

    let docx_table = Table::new(rows)
        .set_grid(grid)
        .align(TableAlignmentType::Center)
        .layout(TableLayoutType::Autofit);

    let doc = Docx::new()
        .page_size(page.width, page.height)
        .page_margin(
            PageMargin::new()
                .top(page.margin_top)
                .bottom(page.margin_bottom)
                .left(page.margin_left)
                .right(page.margin_right),
        )
        .add_table(docx_table);

    let mut buffer = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buffer)
        .map_err(|e| LecternError::Render(format!("Failed to package document: {e}")))?;

    Ok(buffer.into_inner())
}

fn docx_row(row: &LayoutRow, grid: &[usize]) -> TableRow {
    let mut column = 0;
    let cells = row
        .cells
        .iter()
        .map(|cell| {
            let end = (column + cell.grid_span).min(grid.len());
            let width: usize = grid[column.min(end)..end].iter().sum();
            column = end;
            docx_cell(cell, width)
        })
        .collect();

    let mut docx_row = TableRow::new(cells);
    if let Some(height) = row.exact_height {
        docx_row = docx_row
            .row_height(height as f32)
            .height_rule(HeightRule::Exact);
    }
    docx_row
}

fn docx_cell(cell: &LayoutCell, width: usize) -> TableCell {
    let mut paragraph = Paragraph::new();
    if cell.h_align == HAlign::Center {
        paragraph = paragraph.align(AlignmentType::Center);
    }
    for span in &cell.spans {
        paragraph = paragraph.add_run(docx_run(span));
    }

    let mut docx_cell = TableCell::new()
        .add_paragraph(paragraph)
        .width(width, WidthType::Dxa);

    if cell.grid_span > 1 {
        docx_cell = docx_cell.grid_span(cell.grid_span);
    }
    if cell.v_align == VAlign::Center {
        docx_cell = docx_cell.vertical_align(VAlignType::Center);
    }

    docx_cell.set_borders(cell_borders(&cell.borders))
}

/// Every run carries the fixed size and the Latin/East Asian font pair
fn docx_run(span: &Span) -> Run {
    let fonts = RunFonts::new()
        .ascii(LATIN_FONT)
        .hi_ansi(LATIN_FONT)
        .east_asia(EAST_ASIAN_FONT);
    let mut run = Run::new().size(FONT_SIZE_HALF_POINTS).fonts(fonts);
    if span.bold {
        run = run.bold();
    }

    for (i, line) in span.text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    run
}

/// Only the edges the model sets; unset edges fall back to the table borders
fn cell_borders(borders: &CellBorders) -> TableCellBorders {
    [
        (TableCellBorderPosition::Top, borders.top),
        (TableCellBorderPosition::Bottom, borders.bottom),
        (TableCellBorderPosition::Left, borders.left),
        (TableCellBorderPosition::Right, borders.right),
    ]
    .into_iter()
    .filter_map(|(position, style)| style.map(|s| cell_border(position, s)))
    .fold(TableCellBorders::with_empty(), TableCellBorders::set)
}

fn cell_border(position: TableCellBorderPosition, style: BorderStyle) -> TableCellBorder {
    let border = TableCellBorder::new(position);
    match style {
        BorderStyle::Single => border
            .border_type(BorderType::Single)
            .size(BORDER_SIZE)
            .color(BORDER_COLOR),
        BorderStyle::Nil => border.border_type(BorderType::Nil),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{build_table, A4_PAGE};
    use crate::domain::{Activity, LessonRecord};
    use std::io::Read;

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

    #[test]
    fn test_write_docx_contains_texts_and_fonts() {
        let mut record = LessonRecord::default();
        record.topic = "Unit 7 Food".to_string();
        record.add_activity(0, Activity::new("T1", "S1")).unwrap();
        let bytes = write_docx(&build_table(&record), &A4_PAGE).unwrap();
        let xml = document_xml(bytes);

        assert!(xml.contains("Unit 7 Food"));
        assert!(xml.contains("1. T1"));
        assert!(xml.contains("1. S1"));
        assert!(xml.contains("教 · 学 · 流 · 程"));
        assert!(xml.contains(LATIN_FONT));
        assert!(xml.contains(EAST_ASIAN_FONT));
        assert!(xml.contains("gridSpan"));
        assert!(xml.contains("1701"));
    }

    #[test]
    fn test_write_docx_is_structurally_stable() {
        let mut record = LessonRecord::default();
        record.add_activity(3, Activity::new("a", "b")).unwrap();
        let table = build_table(&record);
        // Paragraph ids come from a process-wide counter; ignore them
        let ids = regex::Regex::new(r#"\s[\w:]+(?:Id|id)="[^"]*""#).unwrap();
        let first = document_xml(write_docx(&table, &A4_PAGE).unwrap());
        let second = document_xml(write_docx(&table, &A4_PAGE).unwrap());
        assert_eq!(ids.replace_all(&first, ""), ids.replace_all(&second, ""));
    }

    #[test]
    fn test_cell_borders_only_set_edges() {
        let borders = CellBorders {
            bottom: Some(BorderStyle::Nil),
            left: Some(BorderStyle::Single),
            ..CellBorders::default()
        };
        let expected = TableCellBorders::with_empty()
            .set(TableCellBorder::new(TableCellBorderPosition::Bottom).border_type(BorderType::Nil))
            .set(
                TableCellBorder::new(TableCellBorderPosition::Left)
                    .border_type(BorderType::Single)
                    .size(BORDER_SIZE)
                    .color(BORDER_COLOR),
            );
        assert_eq!(cell_borders(&borders), expected);
        assert_eq!(cell_borders(&CellBorders::default()), TableCellBorders::with_empty());
    }
}
