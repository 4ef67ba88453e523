use crate::classifier::{ClassLabel, ClassifierError, RiskClassifier};
use crate::domain::fields::training_columns;
use crate::domain::FEATURE_COUNT;
use crate::features::FeatureVector;
use anyhow::{ensure, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_THRESHOLD: f64 = 0.5;

/// On-disk export of a fitted logistic regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
}

/// Standardization applied before the linear term: `(x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Clone)]
pub struct LogisticModel {
    name: String,
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
    threshold: f64,
    trained_at: Option<DateTime<Utc>>,
}

impl LogisticModel {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact {}", path.display()))?;
        let model = Self::from_json(&text)
            .with_context(|| format!("invalid model artifact {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            model = %model.name,
            trained_at = ?model.trained_at,
            "classifier loaded"
        );
        Ok(model)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let artifact = serde_json::from_str::<ModelArtifact>(text)
            .context("model artifact is not valid JSON for the logistic schema")?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> anyhow::Result<Self> {
        let expected = training_columns();
        ensure!(
            artifact.feature_names.iter().map(String::as_str).eq(expected),
            "feature_names must be exactly {expected:?} (got {:?})",
            artifact.feature_names
        );

        let coefficients = to_array("coefficients", &artifact.coefficients)?;
        ensure!(artifact.intercept.is_finite(), "intercept must be finite");
        ensure!(
            artifact.threshold > 0.0 && artifact.threshold < 1.0,
            "threshold must be in (0, 1) (got {})",
            artifact.threshold
        );

        let (mean, scale) = match &artifact.scaler {
            Some(scaler) => {
                let mean = to_array("scaler.mean", &scaler.mean)?;
                let scale = to_array("scaler.scale", &scaler.scale)?;
                ensure!(
                    scale.iter().all(|s| *s != 0.0),
                    "scaler.scale must not contain zeros"
                );
                (mean, scale)
            }
            None => ([0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT]),
        };

        let name = match &artifact.version {
            Some(version) => format!("{}@{version}", artifact.name),
            None => artifact.name.clone(),
        };

        Ok(Self {
            name,
            coefficients,
            intercept: artifact.intercept,
            mean,
            scale,
            threshold: artifact.threshold,
            trained_at: artifact.trained_at,
        })
    }

    fn decision(&self, features: &FeatureVector) -> f64 {
        features
            .values()
            .iter()
            .zip(self.coefficients.iter())
            .zip(self.mean.iter().zip(self.scale.iter()))
            .fold(self.intercept, |acc, ((x, w), (m, s))| acc + w * (x - m) / s)
    }

    fn bankrupt_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let z = self.decision(features);
        if z.is_nan() {
            return Err(ClassifierError::Inference(
                "decision function is not a number".to_string(),
            ));
        }
        Ok(sigmoid(z))
    }
}

impl RiskClassifier for LogisticModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        let p1 = self.bankrupt_probability(features)?;
        Ok(if p1 > self.threshold {
            ClassLabel::Bankrupt
        } else {
            ClassLabel::NotBankrupt
        })
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<[f64; 2], ClassifierError> {
        let p1 = self.bankrupt_probability(features)?;
        Ok([1.0 - p1, p1])
    }

    fn trained_at(&self) -> Option<DateTime<Utc>> {
        self.trained_at
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split by sign so exp never overflows.
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn to_array(what: &str, values: &[f64]) -> anyhow::Result<[f64; FEATURE_COUNT]> {
    ensure!(
        values.iter().all(|v| v.is_finite()),
        "{what} must contain only finite numbers"
    );
    <[f64; FEATURE_COUNT]>::try_from(values).map_err(|_| {
        anyhow::anyhow!(
            "{what} must have exactly {FEATURE_COUNT} entries (got {})",
            values.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact() -> serde_json::Value {
        json!({
            "name": "bankruptcy-logreg",
            "version": "test",
            "feature_names": training_columns(),
            "coefficients": [1.0, -1.0, 0.0, -0.5, -2.0, -0.25, 3.0],
            "intercept": -1.0,
        })
    }

    fn model() -> LogisticModel {
        LogisticModel::from_json(&artifact().to_string()).unwrap()
    }

    #[test]
    fn loads_valid_artifact() {
        let model = model();
        assert_eq!(model.name(), "bankruptcy-logreg@test");
        assert_eq!(model.threshold, DEFAULT_THRESHOLD);
        assert_eq!(model.trained_at(), None);
    }

    #[test]
    fn keeps_training_timestamp() {
        let mut value = artifact();
        value["trained_at"] = json!("2025-03-14T09:30:00Z");
        let model = LogisticModel::from_json(&value.to_string()).unwrap();
        let expected = "2025-03-14T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(model.trained_at(), Some(expected));

        value["trained_at"] = json!("last tuesday");
        assert!(LogisticModel::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn zero_vector_yields_sigmoid_of_intercept() {
        let model = model();
        let x = FeatureVector::new([0.0; FEATURE_COUNT]);
        let [p0, p1] = model.predict_probability(&x).unwrap();
        let expected = 1.0 / (1.0 + 1.0_f64.exp());
        assert!((p1 - expected).abs() < 1e-12);
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
        assert_eq!(model.predict(&x).unwrap(), ClassLabel::NotBankrupt);
    }

    #[test]
    fn class_follows_threshold() {
        let model = model();
        let risky = FeatureVector::new([5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let p1 = model.predict_probability(&risky).unwrap()[1];
        assert!(p1 > 0.5);
        assert_eq!(model.predict(&risky).unwrap(), ClassLabel::Bankrupt);
    }

    #[test]
    fn extreme_inputs_stay_in_unit_interval() {
        let model = model();
        for v in [-10_000.0, 10_000_000.0] {
            let x = FeatureVector::new([v; FEATURE_COUNT]);
            let [p0, p1] = model.predict_probability(&x).unwrap();
            assert!((0.0..=1.0).contains(&p0));
            assert!((0.0..=1.0).contains(&p1));
        }
    }

    #[test]
    fn scaler_is_applied() {
        let mut value = artifact();
        value["scaler"] = json!({
            "mean": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "scale": [2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        });
        let model = LogisticModel::from_json(&value.to_string()).unwrap();
        let x = FeatureVector::new([3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        // (3 - 1) / 2 * 1.0 - 1.0 == 0
        assert!((model.decision(&x)).abs() < 1e-12);
    }

    #[test]
    fn rejects_wrong_feature_order() {
        let mut value = artifact();
        let mut names = training_columns().to_vec();
        names.swap(0, 1);
        value["feature_names"] = json!(names);
        assert!(LogisticModel::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn rejects_wrong_coefficient_count() {
        let mut value = artifact();
        value["coefficients"] = json!([1.0, 2.0]);
        let err = LogisticModel::from_json(&value.to_string()).unwrap_err();
        assert!(format!("{err:#}").contains("exactly 7"));
    }

    #[test]
    fn rejects_degenerate_threshold_and_scale() {
        let mut value = artifact();
        value["threshold"] = json!(1.0);
        assert!(LogisticModel::from_json(&value.to_string()).is_err());

        let mut value = artifact();
        value["scaler"] = json!({"mean": vec![0.0; 7], "scale": vec![0.0; 7]});
        assert!(LogisticModel::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = LogisticModel::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read model artifact"));
    }
}
