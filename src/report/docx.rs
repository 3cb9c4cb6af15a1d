//! Rendering of a `ReportDocument` to `.docx` bytes.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow,
};

use crate::report::document::{ReportDocument, SUMMARY_HEADING, TABLE_HEADER};

/// Renders the report: centered title, grid table (header row plus one row
/// per issue), "Project Summary" heading, summary paragraph, page break.
///
/// # Errors
///
/// Returns an error if the document cannot be packaged.
pub fn render(document: &ReportDocument) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let mut rows = Vec::with_capacity(document.rows.len() + 1);
    rows.push(TableRow::new(TABLE_HEADER.iter().map(|text| cell(text)).collect()));
    for row in &document.rows {
        rows.push(TableRow::new(row.iter().map(|text| cell(text)).collect()));
    }

    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "Heading 1", 32))
        .add_style(heading_style("Heading2", "Heading 2", 26))
        .add_paragraph(
            Paragraph::new()
                .style("Heading1")
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(document.title.as_str())),
        )
        .add_table(Table::new(rows))
        .add_paragraph(
            Paragraph::new().style("Heading2").add_run(Run::new().add_text(SUMMARY_HEADING)),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(document.summary.as_str())))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).map_err(
        |e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("failed to package document: {e}").into()
        },
    )?;

    Ok(buffer.into_inner())
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn heading_style(id: &str, name: &str, size: usize) -> Style {
    Style::new(id, StyleType::Paragraph).name(name).size(size).bold()
}
