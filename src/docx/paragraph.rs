/// Paragraph types and implementation for DOCX documents.
use crate::docx::error::{DocxError, Result};
use crate::docx::run::MutableRun;
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ParagraphAlignment::Left => "left",
            ParagraphAlignment::Center => "center",
            ParagraphAlignment::Right => "right",
            ParagraphAlignment::Justify => "both",
        }
    }
}

/// The numId referencing the bullet definition in numbering.xml.
const BULLET_NUM_ID: u32 = 1;

/// A mutable paragraph in a document.
#[derive(Debug)]
pub struct MutableParagraph {
    /// Runs in this paragraph
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: None,
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.runs.push(MutableRun::new());
        self.runs.last_mut().unwrap()
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Set the paragraph style.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Get the paragraph style ID.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Mark this paragraph as a bullet list item at the given indent level.
    ///
    /// Applies the `ListParagraph` style together with the bullet numbering
    /// definition, the same pairing Word itself produces for "List Bullet"
    /// content.
    pub fn set_bullet(&mut self, level: u32) {
        self.style = Some("ListParagraph".to_string());
        self.properties.numbering = Some(NumberingProperties {
            num_id: BULLET_NUM_ID,
            ilvl: level,
        });
    }

    /// Get the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(ref numbering) = self.properties.numbering {
                xml.push_str("<w:numPr>");
                write!(xml, "<w:ilvl w:val=\"{}\"/>", numbering.ilvl)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
                write!(xml, "<w:numId w:val=\"{}\"/>", numbering.num_id)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
                xml.push_str("</w:numPr>");
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) numbering: Option<NumberingProperties>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some() || self.numbering.is_some()
    }
}

/// Numbering (list) properties for a paragraph.
#[derive(Debug)]
pub(crate) struct NumberingProperties {
    pub(crate) num_id: u32,
    pub(crate) ilvl: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml_of(para: &MutableParagraph) -> String {
        let mut xml = String::new();
        para.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_empty_paragraph() {
        let para = MutableParagraph::new();
        assert_eq!(xml_of(&para), "<w:p></w:p>");
    }

    #[test]
    fn test_style_and_alignment() {
        let mut para = MutableParagraph::new();
        para.set_style("Title");
        para.set_alignment(ParagraphAlignment::Center);
        para.add_run_with_text("대규모 프로젝트 개발 가이드");

        let xml = xml_of(&para);
        assert!(xml.contains("<w:pStyle w:val=\"Title\"/>"));
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
    }

    #[test]
    fn test_bullet_numbering() {
        let mut para = MutableParagraph::new();
        para.set_bullet(0);
        para.add_run_with_text("item");

        let xml = xml_of(&para);
        assert!(xml.contains("<w:pStyle w:val=\"ListParagraph\"/>"));
        assert!(xml.contains("<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>"));
    }

    #[test]
    fn test_text_concatenates_runs() {
        let mut para = MutableParagraph::new();
        para.add_run_with_text("규칙 1. ").bold(true);
        para.add_run_with_text("한 번에 한 가지 기능만 만들기");
        assert_eq!(para.text(), "규칙 1. 한 번에 한 가지 기능만 만들기");
        assert_eq!(para.run_count(), 2);
    }
}
