//! Label rules: locate a field's label and capture the rest of its line.

use regex::Regex;

use super::fields::Form16Field;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// A matched label line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch {
    /// Field the match belongs to.
    pub field: Form16Field,
    /// Matched text with surrounding whitespace trimmed.
    pub value: String,
    /// Byte span of the raw match in the source text.
    pub position: (usize, usize),
}

/// Case-insensitive label pattern extended through the end of its line.
#[derive(Debug, Clone)]
pub struct LabelRule {
    field: Form16Field,
    pattern: Regex,
}

impl LabelRule {
    /// Build the rule for one of the static Form-16 fields.
    pub fn for_field(field: Form16Field) -> Self {
        // Labels are compile-time constants covered by tests.
        let pattern = Regex::new(&line_pattern(field.label())).unwrap();
        Self { field, pattern }
    }

    pub fn field(&self) -> Form16Field {
        self.field
    }
}

/// `.` stops at `\n`, so the match runs to the end of the label's line.
fn line_pattern(label: &str) -> String {
    format!("(?i){}.*", label)
}

/// Strips Unicode whitespace plus the ASCII separators U+001C..=U+001F,
/// which text extraction can leave at line ends.
fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

impl FieldExtractor for LabelRule {
    type Output = ExtractionMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern.find(text).map(|m| ExtractionMatch {
            field: self.field,
            value: trim_value(m.as_str()).to_string(),
            position: (m.start(), m.end()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_static_label_compiles() {
        for field in Form16Field::ALL {
            assert_eq!(LabelRule::for_field(field).field(), field);
        }
    }

    #[test]
    fn test_captures_rest_of_line() {
        let rule = LabelRule::for_field(Form16Field::GrossSalary);
        let text = "Details of Salary paid\nGross Salary   5,40,000.00\nLess: Allowances";

        let m = rule.extract(text).unwrap();
        assert_eq!(m.value, "Gross Salary   5,40,000.00");
        assert_eq!(&text[m.position.0..m.position.1], "Gross Salary   5,40,000.00");
    }

    #[test]
    fn test_case_insensitive() {
        let rule = LabelRule::for_field(Form16Field::Tan);
        let m = rule
            .extract("tax deduction account number (tan) abcd12345e")
            .unwrap();
        assert_eq!(m.value, "tax deduction account number (tan) abcd12345e");
    }

    #[test]
    fn test_label_parentheses_are_literal() {
        let rule = LabelRule::for_field(Form16Field::Tan);
        assert!(rule.extract("Tax Deduction Account Number TAN: ABCD12345E").is_none());
    }

    #[test]
    fn test_match_may_start_mid_line() {
        let rule = LabelRule::for_field(Form16Field::EmployerPan);
        let m = rule.extract("Employee PAN | PAN of the Employer AAACX1234F").unwrap();
        assert_eq!(m.value, "PAN of the Employer AAACX1234F");
    }

    #[test]
    fn test_carriage_return_is_trimmed() {
        let rule = LabelRule::for_field(Form16Field::StandardDeduction);
        let m = rule.extract("Standard Deduction 50,000\r\nNext").unwrap();
        assert_eq!(m.value, "Standard Deduction 50,000");
    }

    #[test]
    fn test_information_separators_are_trimmed() {
        let rule = LabelRule::for_field(Form16Field::StandardDeduction);
        let m = rule.extract("Standard Deduction\u{1c}\nNext").unwrap();
        assert_eq!(m.value, "Standard Deduction");

        assert_eq!(trim_value("\u{1f} 50,000 \u{1d}\u{1e}"), "50,000");
        assert_eq!(trim_value("\u{2003}Gross Salary\u{a0}"), "Gross Salary");
    }

    #[test]
    fn test_no_match() {
        let rule = LabelRule::for_field(Form16Field::Section10);
        assert!(rule.extract("").is_none());
        assert!(rule.extract("Exemptions under Section 11").is_none());
    }
}
