//! Request orchestration shared by every transport.
//!
//! A transport only builds a [`RawRequest`]; from there validation, feature mapping,
//! inference, bucketing and response assembly are the same code path, so a query-string
//! GET and a form POST carrying the same values produce the same [`ResponseModel`].

use crate::bucket::bucket;
use crate::classifier::{classify, ClassLabel, ClassifierError, ClassifierOutput, SharedClassifier};
use crate::copy::result_copy;
use crate::domain::fields::LANG_KEY;
use crate::domain::{Language, RawFieldMap, FIELDS};
use crate::features::{map_features, MappingError};
use crate::validate::{validate, ValidationErrorSet};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Query,
    Form,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub transport: Transport,
    pub fields: RawFieldMap,
    pub lang: Language,
}

impl RawRequest {
    /// GET: ratios and language both come from the query string.
    pub fn from_query(query: Vec<(String, String)>) -> Self {
        let lang = Language::pick(lang_param(&query));
        Self {
            transport: Transport::Query,
            fields: RawFieldMap::from_pairs(query),
            lang,
        }
    }

    /// POST: ratios come from the body. A `lang` in the query string wins over one
    /// embedded in the body.
    pub fn from_form(query: Vec<(String, String)>, body: Vec<(String, String)>) -> Self {
        let lang = Language::pick(lang_param(&query).or_else(|| lang_param(&body)));
        Self {
            transport: Transport::Form,
            fields: RawFieldMap::from_pairs(body),
            lang,
        }
    }
}

/// Last `lang` value among request pairs, if any.
pub fn lang_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == LANG_KEY)
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub label: &'static str,
    pub color: &'static str,
    /// Class-1 probability as a percentage, rounded to 2 decimals.
    pub probability_percent: f64,
}

pub fn assess(output: &ClassifierOutput, lang: Language) -> RiskAssessment {
    let risk = bucket(output.class, lang);
    RiskAssessment {
        label: risk.label,
        color: risk.color,
        probability_percent: round2(output.probability * 100.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoRow {
    pub name: &'static str,
    pub value: String,
}

/// Everything the result page needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseModel {
    pub probability: f64,
    pub risk_label: &'static str,
    pub risk_color: &'static str,
    pub interpretation: &'static str,
    pub rows: Vec<EchoRow>,
    pub lang: Language,
    pub form_data: RawFieldMap,
    pub class: ClassLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rendered(ResponseModel),
    RedirectToForm { lang: Language },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Mapping,
    Internal,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("{} field(s) failed validation", .errors.len())]
    Validation {
        lang: Language,
        errors: ValidationErrorSet,
    },
    #[error("feature mapping failed")]
    Mapping { lang: Language, source: MappingError },
    #[error("classification failed")]
    Classifier {
        lang: Language,
        source: ClassifierError,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Validation { .. } => ErrorKind::Validation,
            PipelineError::Mapping { .. } => ErrorKind::Mapping,
            PipelineError::Classifier { .. } => ErrorKind::Internal,
        }
    }

    pub fn lang(&self) -> Language {
        match self {
            PipelineError::Validation { lang, .. }
            | PipelineError::Mapping { lang, .. }
            | PipelineError::Classifier { lang, .. } => *lang,
        }
    }

    /// User-facing messages, one per line on the error page.
    pub fn messages(&self) -> Vec<String> {
        match self {
            PipelineError::Validation { lang, errors } => errors.messages(*lang),
            PipelineError::Mapping { lang, source } => vec![source.message(*lang)],
            PipelineError::Classifier { lang, source } => vec![source.message(*lang).to_string()],
        }
    }
}

#[derive(Clone)]
pub struct RequestPipeline {
    classifier: SharedClassifier,
}

impl RequestPipeline {
    pub fn new(classifier: SharedClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn classifier_trained_at(&self) -> Option<DateTime<Utc>> {
        self.classifier.trained_at()
    }

    pub fn run(&self, request: &RawRequest) -> Result<Outcome, PipelineError> {
        let lang = request.lang;

        let errors = validate(&request.fields);
        if !errors.is_empty() {
            tracing::info!(
                transport = ?request.transport,
                invalid = errors.len(),
                "rejected request with invalid fields"
            );
            return Err(PipelineError::Validation { lang, errors });
        }

        // A bare GET is a navigation to the result URL, not a submission.
        if request.transport == Transport::Query && request.fields.is_empty() {
            return Ok(Outcome::RedirectToForm { lang });
        }

        let features = map_features(&request.fields)
            .map_err(|source| PipelineError::Mapping { lang, source })?;

        let output = classify(self.classifier.as_ref(), &features)
            .map_err(|source| PipelineError::Classifier { lang, source })?;

        let assessment = assess(&output, lang);
        tracing::info!(
            transport = ?request.transport,
            class = output.class.index(),
            probability = assessment.probability_percent,
            "classified request"
        );

        Ok(Outcome::Rendered(build_response(
            &request.fields,
            lang,
            output.class,
            assessment,
        )))
    }
}

fn build_response(
    fields: &RawFieldMap,
    lang: Language,
    class: ClassLabel,
    assessment: RiskAssessment,
) -> ResponseModel {
    let rows = FIELDS
        .iter()
        .map(|def| EchoRow {
            name: def.labels.get(lang),
            value: fields.get(def.key).unwrap_or_default().to_string(),
        })
        .collect();

    ResponseModel {
        probability: assessment.probability_percent,
        risk_label: assessment.label,
        risk_color: assessment.color,
        interpretation: result_copy(lang).interpretation_text,
        rows,
        lang,
        form_data: fields.clone(),
        class,
    }
}
