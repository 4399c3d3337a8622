use std::sync::{Arc, Mutex};
use titanic_predictor::{
    Error, Result,
    model::{Classifier, ModelInfo},
    passenger::{FEATURE_NAMES, FeatureVector},
};

/// Stub classifier returning a fixed probability and recording every call
#[derive(Debug, Default)]
pub struct StubClassifier {
    pub probability: f64,
    pub calls: Arc<Mutex<Vec<FeatureVector>>>,
    pub error: Option<String>,
}

impl StubClassifier {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            ..Self::default()
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_calls(&self) -> Vec<FeatureVector> {
        self.calls.lock().unwrap().clone()
    }
}

impl Classifier for StubClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        self.calls.lock().unwrap().push(*features);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.probability)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            kind: "stub".to_string(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            threshold: 0.5,
        }
    }
}

/// Classifier whose probability is `age / 100`, so results can be traced back to inputs
#[derive(Debug, Default)]
pub struct AgeEchoClassifier;

impl Classifier for AgeEchoClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        Ok(features.values()[2] / 100.0)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            kind: "age_echo".to_string(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            threshold: 0.5,
        }
    }
}
