use super::policy::{PredictionPolicy, apply_jitter};
use crate::{
    Result,
    fare::synthesize_fare,
    model::{Classifier, ModelInfo, PredictionResult, checked_probability},
    passenger::{FeatureVector, PassengerInput},
};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Everything one run of the pipeline produced for a passenger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub passenger: PassengerInput,
    pub fare: f64,
    pub features: FeatureVector,
    /// Probability as the model returned it, before jitter.
    pub raw_probability: f64,
    pub result: PredictionResult,
}

impl Prediction {
    pub fn name(&self) -> &str {
        self.passenger.display_name()
    }
}

/// Form-to-prediction pipeline around a shared, read-only classifier.
#[derive(Clone)]
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
    policy: PredictionPolicy,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn Classifier>, policy: PredictionPolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn policy(&self) -> &PredictionPolicy {
        &self.policy
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            threshold: self.policy.threshold,
            ..self.classifier.info()
        }
    }

    pub fn predict_one<R: Rng + ?Sized>(
        &self,
        passenger: &PassengerInput,
        rng: &mut R,
    ) -> Result<Prediction> {
        passenger.validate()?;

        let fare = synthesize_fare(passenger.class, passenger.sex, rng);
        let features = passenger.features(fare);
        debug!(?features, "feature vector for {}", passenger.display_name());

        let raw_probability = checked_probability(self.classifier.predict_proba(&features)?)?;
        let probability = apply_jitter(raw_probability, self.policy.draw_offset(rng));
        let result = PredictionResult::new(probability, self.policy.threshold);

        info!(
            "Prediction for {}: {:?} ({:.4})",
            passenger.display_name(),
            result.label,
            result.probability
        );

        Ok(Prediction {
            passenger: passenger.clone(),
            fare,
            features,
            raw_probability,
            result,
        })
    }

    /// Predicts every passenger in order. Any failure aborts the whole batch.
    pub fn predict_batch<R: Rng + ?Sized>(
        &self,
        passengers: &[PassengerInput],
        rng: &mut R,
    ) -> Result<Vec<Prediction>> {
        self.policy.check_batch_size(passengers.len())?;
        for passenger in passengers {
            passenger.validate()?;
        }

        let predictions = passengers
            .iter()
            .map(|passenger| self.predict_one(passenger, &mut *rng))
            .collect::<Result<Vec<_>>>()?;

        info!("Batch prediction completed: {} passengers", predictions.len());
        Ok(predictions)
    }

    /// Draws `count` random passengers named "Passenger 1".."Passenger N" and predicts them.
    pub fn predict_random_batch<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Prediction>> {
        self.policy.check_batch_size(count)?;

        let passengers: Vec<PassengerInput> = (1..=count)
            .map(|i| PassengerInput::random(format!("Passenger {i}"), &mut *rng))
            .collect();

        self.predict_batch(&passengers, rng)
    }
}
