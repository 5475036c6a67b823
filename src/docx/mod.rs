//! DOCX document model and writer.
//!
//! The mutable document types mirror Word's own structure: a document owns
//! body elements (paragraphs and tables), paragraphs own runs, tables own
//! rows of cells. [`package::Package`] wraps a document and serializes it
//! to a complete `.docx` file.

pub mod document;
pub mod error;
pub mod package;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod table;
pub(crate) mod template;

pub use document::MutableDocument;
pub use error::{DocxError, Result};
pub use package::{DocumentProperties, Package};
pub use paragraph::{MutableParagraph, ParagraphAlignment};
pub use run::MutableRun;
pub use table::{MutableCell, MutableRow, MutableTable};
