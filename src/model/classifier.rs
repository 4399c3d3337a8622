use super::types::{DEFAULT_THRESHOLD, Label, ModelInfo};
use crate::{Error, Result, passenger::FeatureVector};

/// A pre-trained binary survival classifier over `[pclass, sex, age, fare]`.
///
/// Implementations are loaded once and shared read-only across requests.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Probability of the positive (survived) class.
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64>;

    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        let probability = checked_probability(self.predict_proba(features)?)?;
        Ok(Label::from_probability(probability, DEFAULT_THRESHOLD))
    }

    fn info(&self) -> ModelInfo;
}

/// Rejects probabilities a well-formed classifier cannot produce.
pub fn checked_probability(probability: f64) -> Result<f64> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(Error::inference(format!(
            "classifier returned invalid probability {probability}"
        )));
    }
    Ok(probability)
}
