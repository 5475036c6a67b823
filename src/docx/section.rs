/// Section properties for DOCX documents.
use crate::docx::error::{DocxError, Result};
use std::fmt::Write as FmtWrite;

/// Section properties: page size and margins, in twips (1/1440 inch).
///
/// Defaults match Word's US Letter page with 1-inch margins.
#[derive(Debug)]
pub struct SectionProperties {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub header_distance: u32,
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self {
            page_width: 12240,
            page_height: 15840,
            margin_top: 1440,
            margin_right: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl SectionProperties {
    /// Set all four page margins to the same value, in twips.
    pub fn set_margins(&mut self, twips: u32) {
        self.margin_top = twips;
        self.margin_right = twips;
        self.margin_bottom = twips;
        self.margin_left = twips;
    }

    /// Serialize as the body-final `<w:sectPr>` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");
        write!(
            xml,
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>",
            self.page_width, self.page_height
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;
        write!(
            xml,
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\"/>",
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
            self.header_distance,
            self.footer_distance
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;
        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_letter_with_one_inch_margins() {
        let section = SectionProperties::default();
        assert_eq!(section.page_width, 12240);
        assert_eq!(section.margin_left, 1440);
    }

    #[test]
    fn test_set_margins() {
        let mut section = SectionProperties::default();
        section.set_margins(720);
        assert_eq!(section.margin_top, 720);
        assert_eq!(section.margin_bottom, 720);

        let mut xml = String::new();
        section.to_xml(&mut xml).unwrap();
        assert!(xml.contains("w:top=\"720\""));
        assert!(xml.contains("<w:pgSz w:w=\"12240\" w:h=\"15840\"/>"));
    }
}
