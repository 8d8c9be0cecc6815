//! Label-based Form-16 parser.

use std::time::Instant;

use tracing::{debug, info};

use super::fields::{FieldSpecification, Form16Field};
use super::result::{ExtractionResult, ExtractionResultBuilder, NOT_FOUND};
use super::rules::FieldExtractor;
use super::{Form16Parser, Result};

/// Result of a Form-16 extraction with diagnostics.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted field values.
    pub result: ExtractionResult,
    /// Raw text the fields were matched against.
    pub raw_text: String,
    /// Fields whose label never appeared.
    pub missing: Vec<Form16Field>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Runs every rule of a field specification against the document text.
///
/// Each field is searched from the start of the text independently, so
/// labels sharing a line do not affect each other.
#[derive(Debug, Clone, Copy)]
pub struct Form16Extractor {
    spec: &'static FieldSpecification,
}

impl Form16Extractor {
    /// Create an extractor over the static Form-16 table.
    pub fn new() -> Self {
        Self {
            spec: FieldSpecification::form16(),
        }
    }
}

impl Default for Form16Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Form16Parser for Form16Extractor {
    fn extract(&self, text: &str) -> Result<ExtractionResult> {
        let mut builder = ExtractionResultBuilder::new();

        for rule in self.spec.rules() {
            match rule.extract(text) {
                Some(m) => {
                    debug!("{}: matched at {}..{}", m.field, m.position.0, m.position.1);
                    builder.set(m.field, m.value);
                }
                None => {
                    debug!("{}: label not found", rule.field());
                    builder.set(rule.field(), NOT_FOUND);
                }
            }
        }

        builder.build()
    }

    fn extract_report(&self, text: &str) -> Result<ExtractionReport> {
        let start = Instant::now();
        let result = self.extract(text)?;
        let missing = result.missing_fields();
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Extracted {}/{} fields from {} chars in {}ms",
            result.found_count(),
            Form16Field::ALL.len(),
            text.len(),
            processing_time_ms
        );

        Ok(ExtractionReport {
            result,
            raw_text: text.to_string(),
            missing,
            processing_time_ms,
        })
    }
}
