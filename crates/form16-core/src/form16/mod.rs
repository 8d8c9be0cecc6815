//! Form-16 field extraction module.

mod fields;
mod parser;
mod result;
pub mod rules;

pub use fields::{FieldSpecification, Form16Field, FORM16_SPEC};
pub use parser::{ExtractionReport, Form16Extractor};
pub use result::{ExtractionResult, ExtractionResultBuilder, NOT_FOUND};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for Form-16 parsers.
pub trait Form16Parser {
    /// Extract all ten fields from plain document text.
    fn extract(&self, text: &str) -> Result<ExtractionResult>;

    /// Extract all ten fields along with diagnostics about the run.
    fn extract_report(&self, text: &str) -> Result<ExtractionReport>;
}
