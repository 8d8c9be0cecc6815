//! Error types for the form16-core library.

use thiserror::Error;

/// Main error type for the form16 library.
#[derive(Error, Debug)]
pub enum Form16Error {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

impl PdfError {
    /// Whether the error comes from the document itself rather than from
    /// the text extraction machinery.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Encrypted | Self::NoPages)
    }
}

/// Errors related to Form-16 field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A field was never assigned while building the result.
    #[error("missing field: {0}")]
    MissingField(String),
}

/// Result type for the form16 library.
pub type Result<T> = std::result::Result<T, Form16Error>;
