//! Relationship-related objects for OPC packages.
//!
//! Every part (and the package itself) can own a collection of relationships
//! pointing at other parts or at external resources. Relationships serialize
//! to the `.rels` parts of the package.

use crate::opc::constants::namespace;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,
    /// Relationship type URI
    reltype: String,
    /// Target reference, relative to the source's base URI
    target_ref: String,
    /// Whether the target is external to the package
    is_external: bool,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// Collection of relationships from a single source.
///
/// Insertion order is preserved; rIds are assigned sequentially, so the
/// serialized `.rels` part is deterministic.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self { rels: Vec::new() }
    }

    /// Add an internal relationship, returning its assigned rId.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        self.add_relationship(reltype, target_ref, false)
    }

    /// Add an external relationship, returning its assigned rId.
    pub fn add_external(&mut self, reltype: &str, target_ref: &str) -> String {
        self.add_relationship(reltype, target_ref, true)
    }

    fn add_relationship(&mut self, reltype: &str, target_ref: &str, is_external: bool) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
            is_external,
        });
        r_id
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Get the number of relationships.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Iterate over relationships in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Serialize to `.rels` part XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 128);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::RELATIONSHIPS
        ));
        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            ));
            if rel.is_external {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }
        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_rids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::OFFICE_DOCUMENT, "word/document.xml"), "rId1");
        assert_eq!(rels.add(rt::CORE_PROPERTIES, "docProps/core.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::STYLES, "styles.xml");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="styles.xml""#));
        assert!(!xml.contains("TargetMode"));
    }

    #[test]
    fn test_external_target_mode() {
        let mut rels = Relationships::new();
        rels.add_external(
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink",
            "https://example.com/",
        );
        assert!(rels.to_xml().contains(r#" TargetMode="External""#));
    }
}
