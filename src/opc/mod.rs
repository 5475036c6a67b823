//! Open Packaging Conventions (OPC) support.
//!
//! OPC is the container format shared by the Office Open XML family: a ZIP
//! archive holding XML parts, a content type stream, and relationship parts
//! wiring everything together. This module covers the writing side only —
//! building a package in memory and serializing it to a `.docx` container.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod pkgwriter;
pub mod rel;
pub mod zip;

pub use error::{OpcError, Result};
pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use pkgwriter::PackageWriter;
