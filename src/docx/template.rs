//! Static part templates for new documents.
//!
//! These are the minimal styles and numbering definitions the generated
//! document references: Title, Heading1/Heading2, Quote, ListParagraph, the
//! two accent table styles, and a single bullet list definition.

/// Default `word/styles.xml` content.
pub fn default_styles_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        r#"<w:docDefaults>"#,
        r#"<w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Malgun Gothic" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US" w:eastAsia="ko-KR"/></w:rPr></w:rPrDefault>"#,
        r#"<w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#,
        r#"</w:docDefaults>"#,
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
        r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="80" w:line="240" w:lineRule="auto"/><w:contextualSpacing/></w:pPr><w:rPr><w:spacing w:val="-10"/><w:kern w:val="28"/><w:sz w:val="56"/><w:szCs w:val="56"/></w:rPr></w:style>"#,
        r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before="240" w:after="80"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:color w:val="2E74B5"/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr></w:style>"#,
        r#"<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before="160" w:after="80"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:color w:val="2E74B5"/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr></w:style>"#,
        r#"<w:style w:type="paragraph" w:styleId="Quote"><w:name w:val="Quote"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:before="160" w:after="160"/><w:ind w:left="864" w:right="864"/></w:pPr><w:rPr><w:color w:val="404040"/></w:rPr></w:style>"#,
        r#"<w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/><w:basedOn w:val="Normal"/><w:qFormat/><w:pPr><w:ind w:left="720"/><w:contextualSpacing/></w:pPr></w:style>"#,
        r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>"#,
        r#"<w:style w:type="table" w:styleId="LightGridAccent1"><w:name w:val="Light Grid Accent 1"/><w:basedOn w:val="TableNormal"/><w:tblPr><w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:left w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:bottom w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:right w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:insideH w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/></w:tblBorders></w:tblPr><w:tblStylePr w:type="firstRow"><w:rPr><w:b/></w:rPr><w:tcPr><w:tcBorders><w:bottom w:val="double" w:sz="6" w:space="0" w:color="9CC2E5"/></w:tcBorders></w:tcPr></w:tblStylePr></w:style>"#,
        r#"<w:style w:type="table" w:styleId="LightListAccent1"><w:name w:val="Light List Accent 1"/><w:basedOn w:val="TableNormal"/><w:tblPr><w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:left w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:bottom w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/><w:right w:val="single" w:sz="4" w:space="0" w:color="9CC2E5"/></w:tblBorders></w:tblPr><w:tblStylePr w:type="firstRow"><w:rPr><w:b/></w:rPr><w:tcPr><w:shd w:val="clear" w:color="auto" w:fill="5B9BD5"/></w:tcPr></w:tblStylePr></w:style>"#,
        r#"</w:styles>"#,
    )
}

/// Default `word/numbering.xml` content: one bullet list definition,
/// referenced by paragraphs as numId 1.
pub fn default_numbering_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        r#"<w:abstractNum w:abstractNumId="0">"#,
        r#"<w:multiLevelType w:val="singleLevel"/>"#,
        r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>"#,
        r#"</w:abstractNum>"#,
        r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#,
        r#"</w:numbering>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_define_referenced_ids() {
        let styles = default_styles_xml();
        for id in [
            "Title",
            "Heading1",
            "Heading2",
            "Quote",
            "ListParagraph",
            "LightGridAccent1",
            "LightListAccent1",
        ] {
            assert!(
                styles.contains(&format!("w:styleId=\"{}\"", id)),
                "missing style {}",
                id
            );
        }
    }

    #[test]
    fn test_numbering_defines_num_id_one() {
        let numbering = default_numbering_xml();
        assert!(numbering.contains("<w:num w:numId=\"1\">"));
        assert!(numbering.contains("<w:numFmt w:val=\"bullet\"/>"));
    }
}
