use super::classifier::{Classifier, checked_probability};
use super::types::{DEFAULT_THRESHOLD, ModelInfo};
use crate::{
    Error, Result,
    passenger::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const KIND: &str = "logistic_regression";

/// On-disk layout of a logistic regression artifact.
#[derive(Debug, Deserialize)]
struct Artifact {
    kind: String,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Binary logistic regression: `p = sigmoid(intercept + coefficients · x)`.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        debug!("Loading model artifact from: {}", path_str);

        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::model_load(&path_str, e.to_string()))?;
        let model = Self::from_json(&raw).map_err(|e| match e {
            Error::ModelLoad { reason, .. } => Error::model_load(&path_str, reason),
            other => other,
        })?;

        info!("Loaded {} model from {}", KIND, path_str);
        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let artifact: Artifact = serde_json::from_str(raw)
            .map_err(|e| Error::model_load("<inline>", format!("malformed artifact: {e}")))?;

        if artifact.kind != KIND {
            return Err(Error::model_load(
                "<inline>",
                format!("unsupported model kind '{}', expected '{}'", artifact.kind, KIND),
            ));
        }

        if let Some(names) = &artifact.feature_names {
            if names.len() != FEATURE_COUNT {
                return Err(Error::ModelShape {
                    expected: FEATURE_COUNT,
                    actual: names.len(),
                });
            }
            if names.iter().zip(FEATURE_NAMES).any(|(got, want)| got != want) {
                return Err(Error::model_load(
                    "<inline>",
                    format!("feature order {:?} does not match {:?}", names, FEATURE_NAMES),
                ));
            }
        }

        let coefficients: [f64; FEATURE_COUNT] =
            artifact
                .coefficients
                .as_slice()
                .try_into()
                .map_err(|_| Error::ModelShape {
                    expected: FEATURE_COUNT,
                    actual: artifact.coefficients.len(),
                })?;

        if !artifact.intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::model_load("<inline>", "non-finite weight in artifact"));
        }

        Ok(Self::new(coefficients, artifact.intercept))
    }

    fn logit(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.values())
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticModel {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        let probability = sigmoid(self.logit(features));
        debug!(?features, probability, "logistic prediction");
        checked_probability(probability)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            kind: KIND.to_string(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Label;
    use crate::passenger::{PassengerClass, Sex};
    use std::io::Write;

    const ARTIFACT: &str = r#"{
        "kind": "logistic_regression",
        "feature_names": ["pclass", "sex", "age", "fare"],
        "coefficients": [-1.1, 2.6, -0.04, 0.002],
        "intercept": 2.4
    }"#;

    #[test]
    fn loads_artifact_and_favours_first_class_women() {
        let model = LogisticModel::from_json(ARTIFACT).unwrap();

        let rose = FeatureVector::new(PassengerClass::First, Sex::Female, 25, 80.0);
        let jack = FeatureVector::new(PassengerClass::Third, Sex::Male, 30, 13.0);

        let p_rose = model.predict_proba(&rose).unwrap();
        let p_jack = model.predict_proba(&jack).unwrap();

        assert!(p_rose > 0.9, "got {p_rose}");
        assert!(p_jack < 0.2, "got {p_jack}");
        assert_eq!(model.predict(&rose).unwrap(), Label::Survive);
        assert_eq!(model.predict(&jack).unwrap(), Label::NotSurvive);
    }

    #[test]
    fn zero_weights_give_even_odds() {
        let model = LogisticModel::new([0.0; FEATURE_COUNT], 0.0);
        let features = FeatureVector::new(PassengerClass::Second, Sex::Male, 40, 30.0);
        assert_eq!(model.predict_proba(&features).unwrap(), 0.5);
        assert_eq!(model.predict(&features).unwrap(), Label::Survive);
    }

    #[test]
    fn extreme_logits_stay_in_unit_interval() {
        let features = FeatureVector::new(PassengerClass::First, Sex::Female, 80, 85.0);
        let high = LogisticModel::new([0.0; FEATURE_COUNT], 1_000.0);
        let low = LogisticModel::new([0.0; FEATURE_COUNT], -1_000.0);
        assert_eq!(high.predict_proba(&features).unwrap(), 1.0);
        assert_eq!(low.predict_proba(&features).unwrap(), 0.0);
    }

    #[test]
    fn wrong_coefficient_count_is_a_shape_error() {
        let raw = r#"{"kind":"logistic_regression","coefficients":[1.0,2.0,3.0],"intercept":0.0}"#;
        match LogisticModel::from_json(raw) {
            Err(Error::ModelShape { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_feature_name_count_is_a_shape_error() {
        let raw = r#"{"kind":"logistic_regression","feature_names":["pclass","sex","age","fare","embarked"],
            "coefficients":[1.0,2.0,3.0,4.0],"intercept":0.0}"#;
        assert!(matches!(
            LogisticModel::from_json(raw),
            Err(Error::ModelShape { expected: 4, actual: 5 })
        ));
    }

    #[test]
    fn reordered_features_are_rejected() {
        let raw = r#"{"kind":"logistic_regression","feature_names":["sex","pclass","age","fare"],
            "coefficients":[1.0,2.0,3.0,4.0],"intercept":0.0}"#;
        assert!(matches!(LogisticModel::from_json(raw), Err(Error::ModelLoad { .. })));
    }

    #[test]
    fn unknown_kind_and_garbage_are_load_errors() {
        let raw = r#"{"kind":"random_forest","coefficients":[1.0,2.0,3.0,4.0],"intercept":0.0}"#;
        assert!(matches!(LogisticModel::from_json(raw), Err(Error::ModelLoad { .. })));
        assert!(matches!(LogisticModel::from_json("\u{80}pickle"), Err(Error::ModelLoad { .. })));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = LogisticModel::from_path("/nonexistent/titanic_model.json").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/titanic_model.json"), "{message}");
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = LogisticModel::from_path(file.path()).unwrap_err();
        match err {
            Error::ModelLoad { path, reason } => {
                assert_eq!(path, file.path().display().to_string());
                assert!(reason.contains("malformed"));
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }
}
