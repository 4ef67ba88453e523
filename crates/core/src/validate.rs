use crate::domain::{Language, RawFieldMap};
use std::fmt;

/// Inclusive bounds for any submitted ratio.
pub const MIN_VALUE: f64 = -10_000.0;
pub const MAX_VALUE: f64 = 10_000_000.0;

/// Parses a submitted ratio, tolerating surrounding whitespace.
pub fn parse_ratio(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldErrorKind {
    NotANumber,
    OutOfRange { value: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub raw: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn message(&self, lang: Language) -> String {
        let field = &self.field;
        match (&self.kind, lang) {
            (FieldErrorKind::NotANumber, Language::En) => {
                format!("field '{field}': '{}' is not a number", self.raw)
            }
            (FieldErrorKind::NotANumber, Language::Ru) => {
                format!("Поле '{field}': '{}' не является числом", self.raw)
            }
            (FieldErrorKind::OutOfRange { value }, Language::En) => {
                format!("field '{field}': value {value} is outside the allowed range")
            }
            (FieldErrorKind::OutOfRange { value }, Language::Ru) => {
                format!("Поле '{field}': значение {value} вне допустимого диапазона")
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Language::En))
    }
}

/// Per-field problems, in the order the fields were submitted. Empty means "proceed".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrorSet {
    errors: Vec<FieldError>,
}

impl ValidationErrorSet {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn messages(&self, lang: Language) -> Vec<String> {
        self.errors.iter().map(|e| e.message(lang)).collect()
    }
}

/// Checks every submitted value for numeric form and bounds.
///
/// Blank values are allowed through untouched; whether all seven ratios are present is
/// only enforced later, when the feature vector is built.
pub fn validate(fields: &RawFieldMap) -> ValidationErrorSet {
    let mut errors = Vec::new();
    for (key, raw) in fields.iter() {
        if raw.trim().is_empty() {
            continue;
        }

        let kind = match parse_ratio(raw) {
            None => FieldErrorKind::NotANumber,
            // NaN and infinities fall outside the range as well.
            Some(value) if !(MIN_VALUE..=MAX_VALUE).contains(&value) => {
                FieldErrorKind::OutOfRange { value }
            }
            Some(_) => continue,
        };

        errors.push(FieldError {
            field: key.to_string(),
            raw: raw.to_string(),
            kind,
        });
    }
    ValidationErrorSet { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(key: &str, value: &str) -> RawFieldMap {
        RawFieldMap::from_pairs([(key, value)])
    }

    #[test]
    fn blank_values_are_permitted() {
        let fields = RawFieldMap::from_pairs([("tax_rate_a", ""), ("cash_flow_per_share", "   ")]);
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate(&one("tax_rate_a", "-10000")).is_empty());
        assert!(validate(&one("tax_rate_a", "10000000")).is_empty());

        let low = validate(&one("tax_rate_a", "-10000.01"));
        let high = validate(&one("tax_rate_a", "10000000.01"));
        assert!(matches!(
            low.iter().next().map(|e| &e.kind),
            Some(FieldErrorKind::OutOfRange { .. })
        ));
        assert!(matches!(
            high.iter().next().map(|e| &e.kind),
            Some(FieldErrorKind::OutOfRange { .. })
        ));
    }

    #[test]
    fn non_numeric_value_names_the_field() {
        let errors = validate(&one("cash_flow_per_share", "abc"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.messages(Language::En),
            vec!["field 'cash_flow_per_share': 'abc' is not a number".to_string()]
        );
        assert_eq!(
            errors.messages(Language::Ru),
            vec!["Поле 'cash_flow_per_share': 'abc' не является числом".to_string()]
        );
    }

    #[test]
    fn out_of_range_message_carries_the_value() {
        let errors = validate(&one("interest_expense_ratio", "20000000"));
        assert_eq!(
            errors.messages(Language::En),
            vec!["field 'interest_expense_ratio': value 20000000 is outside the allowed range"
                .to_string()]
        );
        assert!(validate(&one("interest_expense_ratio", "20000")).is_empty());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for raw in ["inf", "-inf", "NaN"] {
            assert_eq!(validate(&one("tax_rate_a", raw)).len(), 1, "{raw}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(validate(&one("tax_rate_a", " 0.25 ")).is_empty());
        assert!(validate(&one("tax_rate_a", "1e3")).is_empty());
    }

    #[test]
    fn errors_follow_submission_order() {
        let fields = RawFieldMap::from_pairs([
            ("tax_rate_a", "x"),
            ("interest_expense_ratio", "0.2"),
            ("net_profit_to_equity", "99999999"),
        ]);
        let errors = validate(&fields);
        let keys: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(keys, vec!["tax_rate_a", "net_profit_to_equity"]);
    }
}
