/// Run types and implementation for DOCX documents.
use crate::docx::error::{DocxError, Result};
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A mutable run.
///
/// Runs contain text and character formatting. Embedded `\n` characters are
/// serialized as explicit `<w:br/>` line breaks.
#[derive(Debug)]
pub struct MutableRun {
    /// Run text
    pub(crate) text: String,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Check whether the run is bold.
    pub fn is_bold(&self) -> bool {
        self.properties.bold == Some(true)
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        if self.properties.has_properties() {
            xml.push_str("<w:rPr>");
            if let Some(bold) = self.properties.bold
                && bold
            {
                xml.push_str("<w:b/>");
            }
            xml.push_str("</w:rPr>");
        }

        // Newlines split the text into spans separated by <w:br/>.
        let mut first = true;
        for segment in self.text.split('\n') {
            if !first {
                xml.push_str("<w:br/>");
            }
            first = false;
            if !segment.is_empty() {
                write!(
                    xml,
                    "<w:t xml:space=\"preserve\">{}</w:t>",
                    escape_xml(segment)
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: Option<bool>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml_of(run: &MutableRun) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_text() {
        let mut run = MutableRun::new();
        run.set_text("hello");
        assert_eq!(
            xml_of(&run),
            "<w:r><w:t xml:space=\"preserve\">hello</w:t></w:r>"
        );
    }

    #[test]
    fn test_bold() {
        let mut run = MutableRun::new();
        run.set_text("hello");
        run.bold(true);
        assert!(xml_of(&run).contains("<w:rPr><w:b/></w:rPr>"));
    }

    #[test]
    fn test_newline_becomes_break() {
        let mut run = MutableRun::new();
        run.set_text("first\nsecond\n");
        let xml = xml_of(&run);
        assert_eq!(xml.matches("<w:br/>").count(), 2);
        assert!(xml.contains(">first</w:t>"));
        assert!(xml.contains(">second</w:t>"));
        // The trailing newline yields a break with no following text span.
        assert!(xml.ends_with("<w:br/></w:r>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut run = MutableRun::new();
        run.set_text("a < b & c");
        assert!(xml_of(&run).contains("a &lt; b &amp; c"));
    }
}
