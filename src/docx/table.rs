/// Table types and implementation for DOCX documents.
use crate::docx::error::{DocxError, Result};
use crate::docx::paragraph::MutableParagraph;
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A mutable table.
///
/// Visual formatting comes from a named table style defined in styles.xml,
/// referenced through `<w:tblStyle>`.
#[derive(Debug)]
pub struct MutableTable {
    /// Table rows
    pub(crate) rows: Vec<MutableRow>,
    /// Table style ID (e.g., "LightGridAccent1")
    pub(crate) style: Option<String>,
}

impl MutableTable {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        let mut table = Self {
            rows: Vec::with_capacity(rows),
            style: None,
        };
        for _ in 0..rows {
            table.add_row(cols);
        }
        table
    }

    /// Add a new row with the specified column count.
    pub fn add_row(&mut self, cols: usize) -> &mut MutableRow {
        self.rows.push(MutableRow::new(cols));
        self.rows.last_mut().unwrap()
    }

    /// Set the named table style.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Get a cell by row and column index.
    pub fn cell(&mut self, row: usize, col: usize) -> Option<&mut MutableCell> {
        self.rows.get_mut(row)?.cell(col)
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index.
    pub fn row(&mut self, index: usize) -> Option<&mut MutableRow> {
        self.rows.get_mut(index)
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");
        if let Some(ref style) = self.style {
            write!(xml, "<w:tblStyle w:val=\"{}\"/>", escape_xml(style))
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }
        // Full page width; 5000 pct units == 100%.
        xml.push_str("<w:tblW w:w=\"5000\" w:type=\"pct\"/>");
        xml.push_str("<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>");
        xml.push_str("</w:tblPr>");

        if let Some(first_row) = self.rows.first() {
            xml.push_str("<w:tblGrid>");
            for _ in 0..first_row.cell_count() {
                xml.push_str("<w:gridCol/>");
            }
            xml.push_str("</w:tblGrid>");
        }

        for row in &self.rows {
            row.to_xml(xml)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }
}

/// A mutable table row.
#[derive(Debug)]
pub struct MutableRow {
    /// Table cells in this row
    pub(crate) cells: Vec<MutableCell>,
}

impl MutableRow {
    pub(crate) fn new(cols: usize) -> Self {
        let mut row = Self {
            cells: Vec::with_capacity(cols),
        };
        for _ in 0..cols {
            row.cells.push(MutableCell::new());
        }
        row
    }

    /// Get a cell by index.
    pub fn cell(&mut self, index: usize) -> Option<&mut MutableCell> {
        self.cells.get_mut(index)
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tr>");
        for cell in &self.cells {
            cell.to_xml(xml)?;
        }
        xml.push_str("</w:tr>");
        Ok(())
    }
}

/// A mutable table cell.
#[derive(Debug)]
pub struct MutableCell {
    /// Paragraphs in this cell
    pub(crate) paragraphs: Vec<MutableParagraph>,
}

impl MutableCell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![MutableParagraph::new()],
        }
    }

    /// Add a new paragraph to the cell.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.paragraphs.push(MutableParagraph::new());
        self.paragraphs.last_mut().unwrap()
    }

    /// Set text in the first paragraph, replacing any existing content.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs.clear();
        let para = self.add_paragraph();
        para.add_run_with_text(text);
    }

    /// Concatenated text of all paragraphs.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tc>");
        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }
        xml.push_str("</w:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let mut table = MutableTable::new(1, 2);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.row(0).unwrap().cell_count(), 2);
    }

    #[test]
    fn test_cell_text() {
        let mut table = MutableTable::new(1, 2);
        table.cell(0, 0).unwrap().set_text("폴더 이름");
        table.cell(0, 1).unwrap().set_text("무엇을 넣을까요?");
        assert_eq!(table.cell(0, 0).unwrap().text(), "폴더 이름");
    }

    #[test]
    fn test_to_xml_shape() {
        let mut table = MutableTable::new(2, 2);
        table.set_style("LightGridAccent1");
        table.cell(0, 0).unwrap().set_text("a");

        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<w:tblStyle w:val=\"LightGridAccent1\"/>"));
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 4);
        assert_eq!(xml.matches("<w:gridCol/>").count(), 2);
    }
}
