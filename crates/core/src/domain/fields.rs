use crate::domain::Language;
use serde::Serialize;

/// Number of ratios the classifier was trained on.
pub const FEATURE_COUNT: usize = 7;

/// Query/form key carrying the UI language. Never treated as a ratio.
pub const LANG_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Localized {
    pub ru: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ru => self.ru,
            Language::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    /// Request key, as submitted by the form.
    pub key: &'static str,
    /// Column name the model saw at training time.
    pub training_column: &'static str,
    pub labels: Localized,
    pub tooltips: Localized,
}

// Order is the model's feature order. Do not reorder.
pub const FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        key: "interest_expense_ratio",
        training_column: "Interest Expense Ratio",
        labels: Localized {
            ru: "Доля расходов",
            en: "Interest / Revenue",
        },
        tooltips: Localized {
            ru: "Расходы компании ÷ выручка за период",
            en: "Total expenses ÷ total revenue",
        },
    },
    FieldSpec {
        key: "net_profit_to_equity",
        training_column: "Net Income to Stockholder's Equity",
        labels: Localized {
            ru: "Рентабельность капитала",
            en: "ROE",
        },
        tooltips: Localized {
            ru: "Чистая прибыль ÷ собственный капитал",
            en: "Net income ÷ shareholders' equity",
        },
    },
    FieldSpec {
        key: "tax_rate_a",
        training_column: "Tax rate (A)",
        labels: Localized {
            ru: "Эффективная ставка налога",
            en: "Tax Rate",
        },
        tooltips: Localized {
            ru: "Расходы на налоги ÷ прибыль до налогообложения",
            en: "Income tax expense ÷ pre-tax income",
        },
    },
    FieldSpec {
        key: "stable_profit_per_share",
        training_column: "Persistent EPS in the Last Four Seasons",
        labels: Localized {
            ru: "Прибыль на акцию (за год)",
            en: "EPS (Annual)",
        },
        tooltips: Localized {
            ru: "Чистая прибыль ÷ количество акций в обращении",
            en: "Net income ÷ number of shares outstanding",
        },
    },
    FieldSpec {
        key: "working_capital_to_total_assets",
        training_column: "Working Capital to Total Assets",
        labels: Localized {
            ru: "Оборотный капитал к общим активам",
            en: "Working Capital Ratio",
        },
        tooltips: Localized {
            ru: "(Оборотные активы − краткосрочные обязательства) ÷ общие активы",
            en: "(Current assets − current liabilities) ÷ total assets",
        },
    },
    FieldSpec {
        key: "cash_flow_per_share",
        training_column: "Cash Flow Per Share",
        labels: Localized {
            ru: "Денежный поток на акцию",
            en: "Cash Flow / Share",
        },
        tooltips: Localized {
            ru: "Операционный денежный поток ÷ количество акций",
            en: "Operating cash flow ÷ shares outstanding",
        },
    },
    FieldSpec {
        key: "contingent_liabilities_to_net_worth",
        training_column: "Contingent liabilities/Net worth",
        labels: Localized {
            ru: "Условные обязательства / Капитал",
            en: "Liabilities / Equity",
        },
        tooltips: Localized {
            ru: "Условные обязательства ÷ собственный капитал",
            en: "Contingent liabilities ÷ shareholders' equity",
        },
    },
];

pub fn is_known_field(key: &str) -> bool {
    FIELDS.iter().any(|f| f.key == key)
}

pub fn training_columns() -> [&'static str; FEATURE_COUNT] {
    FIELDS.map(|f| f.training_column)
}
