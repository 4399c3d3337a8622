use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability at or above which a passenger is labelled as surviving.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Survive,
    NotSurvive,
}

impl Label {
    /// Threshold decision, inclusive at the boundary.
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            Self::Survive
        } else {
            Self::NotSurvive
        }
    }

    pub fn survived(self) -> bool {
        matches!(self, Self::Survive)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Survive => write!(f, "Survive"),
            Self::NotSurvive => write!(f, "Not survive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: Label,
    pub probability: f64,
}

impl PredictionResult {
    pub fn new(probability: f64, threshold: f64) -> Self {
        Self {
            label: Label::from_probability(probability, threshold),
            probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub kind: String,
    pub feature_names: Vec<String>,
    pub threshold: f64,
}
