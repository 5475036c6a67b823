//! DOCX package assembly.
//!
//! Wraps a [`MutableDocument`] together with document properties and turns
//! them into a complete OPC package: the main document part, its styles and
//! numbering parts, and the core/extended property parts.

use crate::docx::document::MutableDocument;
use crate::docx::error::Result;
use crate::docx::template;
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::package::{OpcPackage, Part};
use crate::opc::packuri::PackURI;
use crate::opc::pkgwriter::PackageWriter;
use std::path::Path;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Document metadata serialized to `docProps/core.xml`.
#[derive(Debug, Default)]
pub struct DocumentProperties {
    /// Document title
    pub title: String,
    /// Document author
    pub creator: String,
}

/// A Word document package.
///
/// # Example
///
/// ```
/// use guide_doc::docx::package::Package;
///
/// let mut package = Package::new();
/// package.document_mut().add_paragraph_with_text("Hello");
/// let bytes = package.to_bytes()?;
/// # Ok::<(), guide_doc::docx::error::DocxError>(())
/// ```
pub struct Package {
    document: MutableDocument,
    properties: DocumentProperties,
}

impl Package {
    /// Create a new empty Word document package.
    pub fn new() -> Self {
        Self {
            document: MutableDocument::new(),
            properties: DocumentProperties::default(),
        }
    }

    /// Get a reference to the main document.
    #[inline]
    pub fn document(&self) -> &MutableDocument {
        &self.document
    }

    /// Get a mutable reference to the main document.
    #[inline]
    pub fn document_mut(&mut self) -> &mut MutableDocument {
        &mut self.document
    }

    /// Get a mutable reference to the document properties.
    #[inline]
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Serialize the package to DOCX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut pkg = OpcPackage::new();

        let document_xml = self.document.to_xml()?;
        let document = pkg.add_part(Part::new(
            PackURI::new("/word/document.xml")?,
            ct::WML_DOCUMENT_MAIN,
            document_xml.into_bytes(),
        ))?;
        document.rels_mut().add(rt::STYLES, "styles.xml");
        document.rels_mut().add(rt::NUMBERING, "numbering.xml");

        pkg.add_part(Part::new(
            PackURI::new("/word/styles.xml")?,
            ct::WML_STYLES,
            template::default_styles_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            PackURI::new("/word/numbering.xml")?,
            ct::WML_NUMBERING,
            template::default_numbering_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            ct::OPC_CORE_PROPERTIES,
            self.core_properties_xml().into_bytes(),
        ))?;
        pkg.add_part(Part::new(
            PackURI::new("/docProps/app.xml")?,
            ct::OFC_EXTENDED_PROPERTIES,
            Self::extended_properties_xml().into_bytes(),
        ))?;

        pkg.add_relationship(rt::OFFICE_DOCUMENT, "word/document.xml");
        pkg.add_relationship(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg.add_relationship(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Write the package to a DOCX file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Build `docProps/core.xml` content.
    fn core_properties_xml(&self) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<cp:coreProperties"#,
            r#" xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
            r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
            r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
            r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        ));
        xml.push_str(&format!(
            "<dc:title>{}</dc:title>",
            escape_xml(&self.properties.title)
        ));
        xml.push_str(&format!(
            "<dc:creator>{}</dc:creator>",
            escape_xml(&self.properties.creator)
        ));
        xml.push_str("<cp:revision>1</cp:revision>");
        xml.push_str("</cp:coreProperties>");
        xml
    }

    /// Build `docProps/app.xml` content.
    fn extended_properties_xml() -> String {
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
            r#"<Application>guide-doc</Application>"#,
            r#"</Properties>"#,
        )
        .to_string()
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn member_names(bytes: Vec<u8>) -> Vec<String> {
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut names: Vec<_> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }

    #[test]
    fn test_package_members() {
        let package = Package::new();
        let names = member_names(package.to_bytes().unwrap());
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "docProps/app.xml",
                "docProps/core.xml",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/numbering.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_core_properties_escaped() {
        let mut package = Package::new();
        package.properties_mut().title = "A & B".to_string();
        let xml = package.core_properties_xml();
        assert!(xml.contains("<dc:title>A &amp; B</dc:title>"));
    }

    #[test]
    fn test_document_content_round_trips() {
        let mut package = Package::new();
        package
            .document_mut()
            .add_paragraph_with_text("레고 블록처럼 나누어 개발하기");

        let bytes = package.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut doc = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut doc)
            .unwrap();
        assert!(doc.contains("레고 블록처럼 나누어 개발하기"));
    }
}
