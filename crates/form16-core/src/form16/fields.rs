//! The static Form-16 field specification.

use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::rules::LabelRule;

/// One of the ten fields extracted from a Form-16.
///
/// Variants are declared in specification order; [`Form16Field::ALL`]
/// preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form16Field {
    #[serde(rename = "tax_deducted_at_source")]
    TaxDeductedAtSource,
    #[serde(rename = "tan")]
    Tan,
    #[serde(rename = "employee_pan")]
    EmployeePan,
    #[serde(rename = "employer_pan")]
    EmployerPan,
    #[serde(rename = "employer_address")]
    EmployerAddress,
    #[serde(rename = "gross_salary")]
    GrossSalary,
    #[serde(rename = "section10")]
    Section10,
    #[serde(rename = "standard_deduction")]
    StandardDeduction,
    #[serde(rename = "chapter6A")]
    Chapter6A,
    #[serde(rename = "taxable_income")]
    TaxableIncome,
}

impl Form16Field {
    /// Every field, in specification order.
    pub const ALL: [Form16Field; 10] = [
        Form16Field::TaxDeductedAtSource,
        Form16Field::Tan,
        Form16Field::EmployeePan,
        Form16Field::EmployerPan,
        Form16Field::EmployerAddress,
        Form16Field::GrossSalary,
        Form16Field::Section10,
        Form16Field::StandardDeduction,
        Form16Field::Chapter6A,
        Form16Field::TaxableIncome,
    ];

    /// Wire key used in JSON responses.
    pub fn key(self) -> &'static str {
        match self {
            Self::TaxDeductedAtSource => "tax_deducted_at_source",
            Self::Tan => "tan",
            Self::EmployeePan => "employee_pan",
            Self::EmployerPan => "employer_pan",
            Self::EmployerAddress => "employer_address",
            Self::GrossSalary => "gross_salary",
            Self::Section10 => "section10",
            Self::StandardDeduction => "standard_deduction",
            Self::Chapter6A => "chapter6A",
            Self::TaxableIncome => "taxable_income",
        }
    }

    /// Label pattern (regex syntax) marking the start of the field's line.
    pub fn label(self) -> &'static str {
        match self {
            Self::TaxDeductedAtSource => r"Tax Deducted at Source",
            Self::Tan => r"Tax Deduction Account Number \(TAN\)",
            Self::EmployeePan => r"Permanent Account Number \(PAN\) of the Employee",
            Self::EmployerPan => r"PAN of the Employer",
            Self::EmployerAddress => r"Name and Address of the Employer",
            Self::GrossSalary => r"Gross Salary",
            Self::Section10 => r"Exemptions under Section 10",
            Self::StandardDeduction => r"Standard Deduction",
            Self::Chapter6A => r"Deductions under Chapter VI-A",
            Self::TaxableIncome => r"Total Taxable Income",
        }
    }
}

impl fmt::Display for Form16Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Ordered table of label rules, one per field.
#[derive(Debug)]
pub struct FieldSpecification {
    rules: Vec<LabelRule>,
}

impl FieldSpecification {
    /// The process-wide Form-16 table.
    pub fn form16() -> &'static FieldSpecification {
        &FORM16_SPEC
    }

    fn build() -> Self {
        let rules = Form16Field::ALL.into_iter().map(LabelRule::for_field).collect();
        Self { rules }
    }

    /// Rules in specification order.
    pub fn rules(&self) -> &[LabelRule] {
        &self.rules
    }
}

lazy_static! {
    /// Compiled once on first use, read-only afterwards.
    pub static ref FORM16_SPEC: FieldSpecification = FieldSpecification::build();
}
