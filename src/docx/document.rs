/// Document writer implementation for DOCX.
use crate::docx::error::{DocxError, Result};
use crate::docx::paragraph::MutableParagraph;
use crate::docx::section::SectionProperties;
use crate::docx::table::MutableTable;

/// A mutable Word document body.
///
/// Content is strictly append-only: paragraphs and tables are added at the
/// end of the body and never reordered or removed, so serialization order
/// always equals insertion order.
pub struct MutableDocument {
    /// Document body content (paragraphs, tables) in insertion order
    body: DocumentBody,
    /// Section properties (page setup, margins)
    section: SectionProperties,
}

impl MutableDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            body: DocumentBody::new(),
            section: SectionProperties::default(),
        }
    }

    /// Get a mutable reference to the section properties.
    pub fn section_mut(&mut self) -> &mut SectionProperties {
        &mut self.section
    }

    /// Get a reference to the section properties.
    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Add a new paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.add_paragraph()
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a heading paragraph.
    ///
    /// Level 0 maps to the `Title` style, levels 1-9 to `Heading1`..`Heading9`.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut MutableParagraph> {
        if level > 9 {
            return Err(DocxError::InvalidFormat(
                "Heading level must be 0-9".to_string(),
            ));
        }
        let style = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading{}", level)
        };
        let para = self.add_paragraph();
        para.set_style(&style);
        para.add_run_with_text(text);
        Ok(para)
    }

    /// Add a table with the specified rows and columns.
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.body.add_table(rows, cols)
    }

    /// Get the number of paragraphs in the document body.
    pub fn paragraph_count(&self) -> usize {
        self.body.paragraph_count()
    }

    /// Get the number of tables in the document body.
    pub fn table_count(&self) -> usize {
        self.body.table_count()
    }

    /// Serialize the document to `word/document.xml` content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(16 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
        xml.push_str("<w:body>");
        self.body.to_xml(&mut xml)?;
        // sectPr must be the last element in the body
        self.section.to_xml(&mut xml)?;
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// The document body containing all content elements.
struct DocumentBody {
    /// Content elements in document order
    elements: Vec<BodyElement>,
}

impl DocumentBody {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.elements
            .push(BodyElement::Paragraph(MutableParagraph::new()));
        match self.elements.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.elements
            .push(BodyElement::Table(MutableTable::new(rows, cols)));
        match self.elements.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    fn paragraph_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    fn table_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        for element in &self.elements {
            match element {
                BodyElement::Paragraph(p) => p.to_xml(xml)?,
                BodyElement::Table(t) => t.to_xml(xml)?,
            }
        }
        Ok(())
    }
}

/// A body element (paragraph or table).
enum BodyElement {
    Paragraph(MutableParagraph),
    Table(MutableTable),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_document() {
        let doc = MutableDocument::new();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_add_paragraph() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Hello, World!");
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_heading_styles() {
        let mut doc = MutableDocument::new();
        let title = doc.add_heading("대규모 프로젝트 개발 가이드", 0).unwrap();
        assert_eq!(title.style(), Some("Title"));

        let h1 = doc.add_heading("1. 현재 겪고 계신 문제점", 1).unwrap();
        assert_eq!(h1.style(), Some("Heading1"));
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let mut doc = MutableDocument::new();
        let err = doc.add_heading("too deep", 10).unwrap_err();
        assert!(matches!(err, DocxError::InvalidFormat(_)));
    }

    #[test]
    fn test_xml_generation() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Test paragraph");

        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("<w:document"));
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains("Test paragraph"));
        // sectPr closes the body
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_body_order_is_insertion_order() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("before");
        doc.add_table(1, 2);
        doc.add_paragraph_with_text("after");

        let xml = doc.to_xml().unwrap();
        let before = xml.find(">before<").unwrap();
        let table = xml.find("<w:tbl>").unwrap();
        let after = xml.find(">after<").unwrap();
        assert!(before < table && table < after);
    }
}
