//! In-memory OPC package model.
//!
//! An `OpcPackage` is an ordered collection of parts plus the package-level
//! relationships. Parts are appended once with their final blob; nothing is
//! read back, so there is no lazy loading or part graph here.

use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

/// A single package part: partname, content type, and serialized content.
#[derive(Debug)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Get the partname.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the serialized content.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Get this part's relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get a mutable reference to this part's relationships.
    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// An OPC package under construction.
#[derive(Debug, Default)]
pub struct OpcPackage {
    parts: Vec<Part>,
    rels: Relationships,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            rels: Relationships::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Partnames must be unique; adding a part twice is a caller bug and is
    /// rejected rather than silently shadowed.
    pub fn add_part(&mut self, part: Part) -> Result<&mut Part> {
        if self.parts.iter().any(|p| p.partname() == part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(self.parts.last_mut().expect("part was just pushed"))
    }

    /// Add a package-level relationship, returning its rId.
    pub fn add_relationship(&mut self, reltype: &str, target_ref: &str) -> String {
        self.rels.add(reltype, target_ref)
    }

    /// Package-level relationships (serialized to `/_rels/.rels`).
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get the number of parts.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::content_type as ct;

    fn part(uri: &str) -> Part {
        Part::new(PackURI::new(uri).unwrap(), ct::XML, b"<x/>".to_vec())
    }

    #[test]
    fn test_parts_keep_insertion_order() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/word/document.xml")).unwrap();
        pkg.add_part(part("/word/styles.xml")).unwrap();

        let names: Vec<_> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, ["/word/document.xml", "/word/styles.xml"]);
    }

    #[test]
    fn test_duplicate_partname_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/word/document.xml")).unwrap();
        let err = pkg.add_part(part("/word/document.xml")).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
    }
}
