//! Core library for Form-16 field extraction.
//!
//! This crate provides:
//! - PDF processing (plain text extraction)
//! - The static Form-16 field specification (ten label patterns)
//! - Label-based field extraction with a `"Not Found"` sentinel
//! - Configuration shared by the server and the CLI

pub mod error;
pub mod models;
pub mod pdf;
pub mod form16;

pub use error::{Form16Error, Result};
pub use models::config::{Form16Config, PdfConfig};
pub use pdf::{PdfProcessor, PdfExtractor, PdfContent, PdfType};
pub use form16::{
    ExtractionReport, ExtractionResult, FieldSpecification, Form16Extractor, Form16Field,
    Form16Parser, NOT_FOUND,
};

/// Extract the Form-16 fields from raw PDF bytes.
///
/// Runs [`PdfExtractor`] with the given settings and feeds its text to
/// [`Form16Extractor`].
pub fn extract_from_pdf(data: &[u8], config: &PdfConfig) -> Result<ExtractionResult> {
    let mut pdf = PdfExtractor::with_config(config.clone());
    pdf.load(data)?;
    let content = pdf.extract_content()?;
    Ok(Form16Extractor::new().extract(&content.text)?)
}
