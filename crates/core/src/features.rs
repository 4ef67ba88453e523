use crate::domain::{Language, RawFieldMap, FEATURE_COUNT, FIELDS};
use crate::validate::parse_ratio;

/// The seven ratios in the order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MappingError {
    #[error("required field '{field}' is missing")]
    Missing { field: &'static str },
    #[error("required field '{field}' is blank")]
    Blank { field: &'static str },
    #[error("required field '{field}': '{raw}' is not a number")]
    NotANumber { field: &'static str, raw: String },
}

impl MappingError {
    pub fn field(&self) -> &'static str {
        match self {
            MappingError::Missing { field }
            | MappingError::Blank { field }
            | MappingError::NotANumber { field, .. } => field,
        }
    }

    /// Same wording as `Display` for `en`.
    pub fn message(&self, lang: Language) -> String {
        match (self, lang) {
            (MappingError::NotANumber { field, raw }, Language::Ru) => {
                format!("Обязательное поле '{field}': '{raw}' не является числом")
            }
            (MappingError::Missing { field } | MappingError::Blank { field }, Language::Ru) => {
                format!("Обязательное поле '{field}' не заполнено")
            }
            (err, Language::En) => err.to_string(),
        }
    }
}

/// Reads every ratio by key, in feature order.
///
/// This is where "all seven fields are required" is enforced; the validator lets blanks
/// through.
pub fn map_features(fields: &RawFieldMap) -> Result<FeatureVector, MappingError> {
    let mut values = [0.0; FEATURE_COUNT];
    for (slot, def) in values.iter_mut().zip(FIELDS.iter()) {
        let field = def.key;
        let raw = fields.get(field).ok_or(MappingError::Missing { field })?;
        if raw.trim().is_empty() {
            return Err(MappingError::Blank { field });
        }
        *slot = parse_ratio(raw).ok_or_else(|| MappingError::NotANumber {
            field,
            raw: raw.to_string(),
        })?;
    }
    Ok(FeatureVector(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> Vec<(&'static str, &'static str)> {
        vec![
            ("interest_expense_ratio", "0.2"),
            ("net_profit_to_equity", "0.1"),
            ("tax_rate_a", "0.25"),
            ("stable_profit_per_share", "1.5"),
            ("working_capital_to_total_assets", "0.3"),
            ("cash_flow_per_share", "2.0"),
            ("contingent_liabilities_to_net_worth", "0.05"),
        ]
    }

    #[test]
    fn builds_vector_in_feature_order() {
        let fields = RawFieldMap::from_pairs(full_input());
        let vector = map_features(&fields).unwrap();
        assert_eq!(vector.values(), &[0.2, 0.1, 0.25, 1.5, 0.3, 2.0, 0.05]);
    }

    #[test]
    fn ignores_submission_order() {
        let mut reversed = full_input();
        reversed.reverse();
        let fields = RawFieldMap::from_pairs(reversed);
        let vector = map_features(&fields).unwrap();
        assert_eq!(vector.values(), &[0.2, 0.1, 0.25, 1.5, 0.3, 2.0, 0.05]);
    }

    #[test]
    fn missing_field_is_reported() {
        let input: Vec<_> = full_input()
            .into_iter()
            .filter(|(k, _)| *k != "tax_rate_a")
            .collect();
        let err = map_features(&RawFieldMap::from_pairs(input)).unwrap_err();
        assert_eq!(err, MappingError::Missing { field: "tax_rate_a" });
    }

    #[test]
    fn blank_field_is_reported() {
        let input: Vec<_> = full_input()
            .into_iter()
            .map(|(k, v)| if k == "cash_flow_per_share" { (k, " ") } else { (k, v) })
            .collect();
        let err = map_features(&RawFieldMap::from_pairs(input)).unwrap_err();
        assert_eq!(err.field(), "cash_flow_per_share");
        assert!(matches!(err, MappingError::Blank { .. }));
    }

    #[test]
    fn all_blank_fails_on_first_field() {
        let input: Vec<_> = full_input().into_iter().map(|(k, _)| (k, "")).collect();
        let err = map_features(&RawFieldMap::from_pairs(input)).unwrap_err();
        assert_eq!(err.field(), "interest_expense_ratio");
    }

    #[test]
    fn message_follows_language() {
        let err = MappingError::Blank { field: "tax_rate_a" };
        assert_eq!(err.message(Language::En), "required field 'tax_rate_a' is blank");
        assert_eq!(err.message(Language::Ru), "Обязательное поле 'tax_rate_a' не заполнено");

        let err = MappingError::NotANumber {
            field: "tax_rate_a",
            raw: "x".to_string(),
        };
        assert_eq!(
            err.message(Language::Ru),
            "Обязательное поле 'tax_rate_a': 'x' не является числом"
        );
    }
}
