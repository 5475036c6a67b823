/// Error types for document building and serialization.
use thiserror::Error;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocxError>;

/// Error types for document operations.
#[derive(Error, Debug)]
pub enum DocxError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::error::OpcError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
