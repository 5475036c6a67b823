//! guide-doc - Generates the LMS development guide as a Word document
//!
//! The crate builds one fixed document, a Korean-language guide to managing
//! large LMS (learning management system) projects, and writes it out as a
//! `.docx` file. It is layered the way the file format is:
//!
//! - **opc**: the Open Packaging Conventions container (ZIP archive,
//!   content types, relationships)
//! - **docx**: the WordprocessingML document model and its XML writer
//! - **guide**: the guide content assembled on top of the docx model
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let package = guide_doc::guide::build()?;
//! package.save(guide_doc::guide::OUTPUT_FILE_NAME)?;
//! # Ok(())
//! # }
//! ```

pub mod docx;
pub mod guide;
pub mod opc;

pub use docx::{DocxError, Package, Result};
