//! Pack URI handling for OPC packages.
//!
//! A pack URI identifies a part inside the package, e.g. `/word/document.xml`.
//! The package itself is identified by `/`.

use crate::opc::error::{OpcError, Result};

/// Pack URI of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// Pack URI of the package itself.
pub const PACKAGE_URI: &str = "/";

/// A validated pack URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI(String);

impl PackURI {
    /// Create a pack URI, validating that it is package-root relative.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "pack URI must begin with a slash, got {:?}",
                uri
            )));
        }
        Ok(Self(uri))
    }

    /// The URI as a string slice, including the leading slash.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ZIP member name for this part (the URI without its leading slash).
    #[inline]
    pub fn membername(&self) -> &str {
        &self.0[1..]
    }

    /// File extension, without the dot. Empty if there is none.
    pub fn ext(&self) -> &str {
        match self.filename().rsplit_once('.') {
            Some((_, ext)) => ext,
            None => "",
        }
    }

    /// Final path segment of the URI.
    pub fn filename(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, name)) => name,
            None => "",
        }
    }

    /// Directory portion of the URI, without a trailing slash.
    ///
    /// `/word/document.xml` -> `/word`; a root-level part yields the empty
    /// string, and the package URI yields itself.
    pub fn baseuri(&self) -> &str {
        if self.0 == PACKAGE_URI {
            return &self.0;
        }
        match self.0.rsplit_once('/') {
            Some((base, _)) => base,
            None => "",
        }
    }

    /// Pack URI of the relationships part for this source.
    ///
    /// `/word/document.xml` -> `/word/_rels/document.xml.rels`;
    /// the package URI maps to `/_rels/.rels`.
    pub fn rels_uri(&self) -> PackURI {
        if self.0 == PACKAGE_URI {
            return PackURI("/_rels/.rels".to_string());
        }
        PackURI(format!("{}/_rels/{}.rels", self.baseuri(), self.filename()))
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_uri() {
        assert!(PackURI::new("word/document.xml").is_err());
    }

    #[test]
    fn test_membername_strips_slash() {
        let uri = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(uri.membername(), "word/document.xml");
    }

    #[test]
    fn test_ext_and_filename() {
        let uri = PackURI::new("/word/styles.xml").unwrap();
        assert_eq!(uri.filename(), "styles.xml");
        assert_eq!(uri.ext(), "xml");

        let uri = PackURI::new(CONTENT_TYPES_URI).unwrap();
        assert_eq!(uri.ext(), "xml");
    }

    #[test]
    fn test_rels_uri() {
        let package = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(package.rels_uri().as_str(), "/_rels/.rels");

        let part = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(part.rels_uri().as_str(), "/word/_rels/document.xml.rels");
    }
}
