//! Localized page copy. Pages pick one table per request by `Language`.

use crate::domain::Language;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IndexCopy {
    pub page_title: &'static str,
    pub eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub cta: &'static str,
    pub features: [FeatureCard; 3],
    pub technology: &'static str,
    pub footer: &'static str,
    pub lang_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormCopy {
    pub page_title: &'static str,
    pub eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub criterion_col: &'static str,
    pub value_col: &'static str,
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub back_home: &'static str,
    pub footer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResultCopy {
    pub page_title: &'static str,
    pub eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub result_label: &'static str,
    pub interpretation_title: &'static str,
    pub interpretation_text: &'static str,
    pub table_title: &'static str,
    pub criterion_col: &'static str,
    pub value_col: &'static str,
    pub table_helper: &'static str,
    pub back_form: &'static str,
    pub back_home: &'static str,
    pub footer: &'static str,
    /// Indexed by predicted class.
    pub bankruptcy_status: [&'static str; 2],
}

#[derive(Debug, Serialize)]
pub struct ErrorCopy {
    pub validation_title: &'static str,
    pub validation_lead: &'static str,
    pub internal_title: &'static str,
    pub internal_lead: &'static str,
    pub incident_label: &'static str,
    pub back_form: &'static str,
}

const FOOTER_RU: &str = "© 2025 Финансовая аналитическая система";
const FOOTER_EN: &str = "© 2025 Financial Analytics System";
const EYEBROW: &str = "Fintech analytics";

static INDEX_RU: IndexCopy = IndexCopy {
    page_title: "Система прогнозирования банкротства",
    eyebrow: EYEBROW,
    hero_title: "Система прогнозирования банкротства",
    hero_subtitle: "Аналитика финансовых рисков с использованием моделей машинного обучения.",
    cta: "Перейти к прогнозу",
    features: [
        FeatureCard {
            title: "Мгновенная оценка",
            text: "Модель анализирует финансовые показатели и вычисляет вероятность банкротства.",
        },
        FeatureCard {
            title: "Понятный отчёт",
            text: "Объяснение факторов риска и ключевых метрик.",
        },
        FeatureCard {
            title: "Поддержка решений",
            text: "Подходит для аналитиков, инвесторов и компаний.",
        },
    ],
    technology: "Система использует современные методы машинного обучения для точного прогнозирования вероятности банкротства и выявления рисковых факторов.",
    footer: FOOTER_RU,
    lang_label: "RU",
};

static INDEX_EN: IndexCopy = IndexCopy {
    page_title: "Bankruptcy Prediction System",
    eyebrow: EYEBROW,
    hero_title: "Bankruptcy Prediction System",
    hero_subtitle: "Financial risk analytics powered by machine learning models.",
    cta: "Go to prediction",
    features: [
        FeatureCard {
            title: "Instant assessment",
            text: "The model analyzes financial indicators and estimates bankruptcy probability.",
        },
        FeatureCard {
            title: "Clear report",
            text: "Explains risk factors and key metrics.",
        },
        FeatureCard {
            title: "Decision support",
            text: "Suitable for analysts, investors, and companies.",
        },
    ],
    technology: "The system applies modern machine learning methods to accurately predict bankruptcy probability and reveal risk drivers.",
    footer: FOOTER_EN,
    lang_label: "EN",
};

static FORM_RU: FormCopy = FormCopy {
    page_title: "Введите финансовые показатели | Система прогнозирования",
    eyebrow: EYEBROW,
    hero_title: "Введите финансовые показатели компании",
    hero_subtitle: "Эти данные используются для расчёта вероятности банкротства.",
    criterion_col: "Критерий",
    value_col: "Коэффициент",
    placeholder: "Введите значение",
    submit: "Рассчитать прогноз",
    back_home: "← На главную",
    footer: FOOTER_RU,
};

static FORM_EN: FormCopy = FormCopy {
    page_title: "Enter financial metrics | Bankruptcy prediction",
    eyebrow: EYEBROW,
    hero_title: "Enter the company's financial metrics",
    hero_subtitle: "These inputs are used to estimate bankruptcy probability.",
    criterion_col: "Criterion",
    value_col: "Coefficient",
    placeholder: "Enter a value",
    submit: "Calculate forecast",
    back_home: "← Back to home",
    footer: FOOTER_EN,
};

static RESULT_RU: ResultCopy = ResultCopy {
    page_title: "Результат прогнозирования | Система прогнозирования",
    eyebrow: EYEBROW,
    hero_title: "Результат прогнозирования",
    hero_subtitle: "Оценка вероятности банкротства по введённым показателям.",
    result_label: "Вероятность банкротства",
    interpretation_title: "Пояснение",
    interpretation_text: "Риск рассчитан по введённым показателям. Чем выше риск, тем внимательнее стоит проверить долговую нагрузку и ликвидность.",
    table_title: "Введённые данные",
    criterion_col: "Критерий",
    value_col: "Коэффициент",
    table_helper: "Убедитесь, что все показатели переданы корректно.",
    back_form: "Вернуться к вводу данных",
    back_home: "На главную",
    footer: FOOTER_RU,
    bankruptcy_status: ["Не Банкрот", "Банкрот"],
};

static RESULT_EN: ResultCopy = ResultCopy {
    page_title: "Prediction result | Bankruptcy prediction",
    eyebrow: EYEBROW,
    hero_title: "Prediction result",
    hero_subtitle: "Bankruptcy probability based on the provided metrics.",
    result_label: "Bankruptcy probability",
    interpretation_title: "Explanation",
    interpretation_text: "Risk is calculated from the provided metrics. Higher risk suggests a closer review of leverage and liquidity.",
    table_title: "Submitted data",
    criterion_col: "Criterion",
    value_col: "Coefficient",
    table_helper: "Please verify all metrics are captured correctly.",
    back_form: "Back to form",
    back_home: "Back to home",
    footer: FOOTER_EN,
    bankruptcy_status: ["Not Bankrupt", "Bankrupt"],
};

static ERROR_RU: ErrorCopy = ErrorCopy {
    validation_title: "Ошибка валидации данных",
    validation_lead: "Ошибки в данных:",
    internal_title: "Ошибка обработки данных",
    internal_lead: "Не удалось рассчитать прогноз.",
    incident_label: "Код инцидента",
    back_form: "← Вернуться к форме",
};

static ERROR_EN: ErrorCopy = ErrorCopy {
    validation_title: "Data validation error",
    validation_lead: "Problems with the submitted data:",
    internal_title: "Data processing error",
    internal_lead: "The forecast could not be calculated.",
    incident_label: "Incident id",
    back_form: "← Back to form",
};

pub fn index_copy(lang: Language) -> &'static IndexCopy {
    match lang {
        Language::Ru => &INDEX_RU,
        Language::En => &INDEX_EN,
    }
}

pub fn form_copy(lang: Language) -> &'static FormCopy {
    match lang {
        Language::Ru => &FORM_RU,
        Language::En => &FORM_EN,
    }
}

pub fn result_copy(lang: Language) -> &'static ResultCopy {
    match lang {
        Language::Ru => &RESULT_RU,
        Language::En => &RESULT_EN,
    }
}

pub fn error_copy(lang: Language) -> &'static ErrorCopy {
    match lang {
        Language::Ru => &ERROR_RU,
        Language::En => &ERROR_EN,
    }
}
