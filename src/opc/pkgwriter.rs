//! Package writer for OPC packages.
//!
//! Serializes an OPC package to a ZIP container: the [Content_Types].xml
//! stream, the package-level `_rels/.rels`, and every part together with
//! its relationships.

use crate::opc::constants::{content_type as ct, namespace};
use crate::opc::error::Result;
use crate::opc::package::OpcPackage;
use crate::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::opc::zip::ArchiveWriter;
use std::collections::HashMap;
use std::path::Path;

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```
/// use guide_doc::opc::package::OpcPackage;
/// use guide_doc::opc::pkgwriter::PackageWriter;
///
/// let pkg = OpcPackage::new();
/// let bytes = PackageWriter::to_bytes(&pkg)?;
/// # Ok::<(), guide_doc::opc::error::OpcError>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut archive = ArchiveWriter::new();

        Self::write_content_types(&mut archive, package)?;
        Self::write_pkg_rels(&mut archive, package)?;
        Self::write_parts(&mut archive, package)?;

        archive.finish_to_bytes()
    }

    /// Write the [Content_Types].xml stream.
    fn write_content_types(archive: &mut ArchiveWriter, package: &OpcPackage) -> Result<()> {
        let cti = ContentTypesItem::from_package(package);
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI)?;
        archive.write_deflated(content_types_uri.membername(), cti.to_xml().as_bytes())
    }

    /// Write package-level relationships (`_rels/.rels`).
    fn write_pkg_rels(archive: &mut ArchiveWriter, package: &OpcPackage) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri();
        archive.write_deflated(rels_uri.membername(), package.rels().to_xml().as_bytes())
    }

    /// Write all parts and their relationships.
    fn write_parts(archive: &mut ArchiveWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            archive.write_deflated(part.partname().membername(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri();
                archive.write_deflated(rels_uri.membername(), part.rels().to_xml().as_bytes())?;
            }
        }
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: HashMap<String, String>,
    /// Override content types by partname
    overrides: HashMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Build a ContentTypesItem from the parts of a package.
    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Add a content type for a part.
    ///
    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise adds an override for the specific partname.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    /// Check if an extension/content-type pair is a standard default.
    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!((ext, content_type), ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML))
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::CONTENT_TYPES));

        // Default elements, sorted by extension for deterministic output
        let mut exts: Vec<_> = self.defaults.keys().collect();
        exts.sort();
        for ext in exts {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                Self::escape_xml(ext),
                Self::escape_xml(&self.defaults[ext])
            ));
        }

        // Override elements, sorted by partname
        let mut partnames: Vec<_> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                Self::escape_xml(partname),
                Self::escape_xml(&self.overrides[partname])
            ));
        }

        xml.push_str("</Types>");
        xml
    }

    /// Escape XML special characters.
    #[inline]
    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}
