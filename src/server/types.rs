use crate::{
    model::Label,
    passenger::{FeatureVector, PassengerInput},
    predict::Prediction,
    present::{self, BAR_WIDTH, BatchRow, Headline},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub passengers: Vec<PassengerInput>,
}

/// Batch action of the HTML form: how many random passengers to draw.
#[derive(Debug, Deserialize)]
pub struct BatchForm {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PredictionView {
    pub name: String,
    pub fare: f64,
    pub features: FeatureVector,
    pub probability: f64,
    pub label: Label,
    pub percentage: String,
    pub headline: Headline,
    pub progress: String,
}

impl From<&Prediction> for PredictionView {
    fn from(prediction: &Prediction) -> Self {
        let probability = prediction.result.probability;
        Self {
            name: prediction.name().to_string(),
            fare: prediction.fare,
            features: prediction.features,
            probability,
            label: prediction.result.label,
            percentage: present::percentage(probability),
            headline: present::headline(prediction),
            progress: present::progress_bar(probability, BAR_WIDTH),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub request_id: Uuid,
    pub timestamp: String,
    pub prediction: PredictionView,
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub request_id: Uuid,
    pub timestamp: String,
    pub count: usize,
    pub predictions: Vec<PredictionView>,
    pub rows: Vec<BatchRow>,
    pub table: String,
    pub chart: String,
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
