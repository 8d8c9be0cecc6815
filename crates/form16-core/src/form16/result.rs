//! The fixed ten-field extraction record.

use serde::{Deserialize, Serialize};

use super::fields::Form16Field;
use super::Result;
use crate::error::ExtractionError;

/// Value stored for a field whose label never appears in the document.
pub const NOT_FOUND: &str = "Not Found";

/// Values for all ten Form-16 fields.
///
/// Each value is either the trimmed matched line or [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub tax_deducted_at_source: String,
    pub tan: String,
    pub employee_pan: String,
    pub employer_pan: String,
    pub employer_address: String,
    pub gross_salary: String,
    pub section10: String,
    pub standard_deduction: String,
    #[serde(rename = "chapter6A")]
    pub chapter6a: String,
    pub taxable_income: String,
}

impl ExtractionResult {
    /// Result with every field set to [`NOT_FOUND`].
    pub fn not_found() -> Self {
        let mut builder = ExtractionResultBuilder::new();
        for field in Form16Field::ALL {
            builder.set(field, NOT_FOUND);
        }
        builder.into_result_unchecked()
    }

    pub fn get(&self, field: Form16Field) -> &str {
        match field {
            Form16Field::TaxDeductedAtSource => &self.tax_deducted_at_source,
            Form16Field::Tan => &self.tan,
            Form16Field::EmployeePan => &self.employee_pan,
            Form16Field::EmployerPan => &self.employer_pan,
            Form16Field::EmployerAddress => &self.employer_address,
            Form16Field::GrossSalary => &self.gross_salary,
            Form16Field::Section10 => &self.section10,
            Form16Field::StandardDeduction => &self.standard_deduction,
            Form16Field::Chapter6A => &self.chapter6a,
            Form16Field::TaxableIncome => &self.taxable_income,
        }
    }

    /// `(field, value)` pairs in specification order.
    pub fn iter(&self) -> impl Iterator<Item = (Form16Field, &str)> + '_ {
        Form16Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Fields holding the sentinel, in specification order.
    pub fn missing_fields(&self) -> Vec<Form16Field> {
        self.iter()
            .filter(|(_, v)| *v == NOT_FOUND)
            .map(|(f, _)| f)
            .collect()
    }

    pub fn found_count(&self) -> usize {
        Form16Field::ALL.len() - self.missing_fields().len()
    }
}

/// Collects per-field values and checks that none were skipped.
#[derive(Debug, Default)]
pub struct ExtractionResultBuilder {
    values: [Option<String>; 10],
}

impl ExtractionResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Form16Field, value: impl Into<String>) -> &mut Self {
        self.values[field as usize] = Some(value.into());
        self
    }

    /// Assemble the record, failing on the first field that was never set.
    pub fn build(self) -> Result<ExtractionResult> {
        if let Some(field) = Form16Field::ALL
            .into_iter()
            .find(|f| self.values[*f as usize].is_none())
        {
            return Err(ExtractionError::MissingField(field.key().to_string()));
        }
        Ok(self.into_result_unchecked())
    }

    fn into_result_unchecked(self) -> ExtractionResult {
        let [
            tax_deducted_at_source,
            tan,
            employee_pan,
            employer_pan,
            employer_address,
            gross_salary,
            section10,
            standard_deduction,
            chapter6a,
            taxable_income,
        ] = self.values.map(Option::unwrap_or_default);

        ExtractionResult {
            tax_deducted_at_source,
            tan,
            employee_pan,
            employer_pan,
            employer_address,
            gross_salary,
            section10,
            standard_deduction,
            chapter6a,
            taxable_income,
        }
    }
}
