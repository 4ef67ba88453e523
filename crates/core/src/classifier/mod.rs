//! Classifier seam. The pipeline only ever sees `dyn RiskClassifier`; the concrete model is
//! loaded once at startup and shared read-only behind an `Arc`.

pub mod logistic;

use crate::domain::Language;
use crate::features::FeatureVector;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

pub use logistic::LogisticModel;

pub type SharedClassifier = Arc<dyn RiskClassifier>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassLabel {
    NotBankrupt,
    Bankrupt,
}

impl ClassLabel {
    pub fn index(self) -> u8 {
        match self {
            ClassLabel::NotBankrupt => 0,
            ClassLabel::Bankrupt => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOutput {
    pub class: ClassLabel,
    /// Probability of class 1 (bankrupt), in `[0, 1]`.
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("classifier returned invalid probabilities [{p0}, {p1}]")]
    InvalidProbability { p0: f64, p1: f64 },
}

impl ClassifierError {
    /// Text shown to the user; the details only go to the logs.
    pub fn message(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ru => "Модель не смогла выполнить расчёт",
            Language::En => "the model could not produce a forecast",
        }
    }
}

/// Contract of a pre-trained binary classifier. Both methods must be deterministic for a
/// given input and safe to call concurrently.
pub trait RiskClassifier: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError>;

    /// `[p(class = 0), p(class = 1)]`.
    fn predict_probability(&self, features: &FeatureVector) -> Result<[f64; 2], ClassifierError>;

    /// When the model was fitted, if the implementation knows.
    fn trained_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// One inference call: class plus class-1 probability, with the output domain checked.
pub fn classify(
    model: &dyn RiskClassifier,
    features: &FeatureVector,
) -> Result<ClassifierOutput, ClassifierError> {
    let class = model.predict(features)?;
    let [p0, p1] = model.predict_probability(features)?;

    let in_unit = |p: f64| (0.0..=1.0).contains(&p);
    if !in_unit(p0) || !in_unit(p1) || (p0 + p1 - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(ClassifierError::InvalidProbability { p0, p1 });
    }

    Ok(ClassifierOutput {
        class,
        probability: p1,
    })
}
