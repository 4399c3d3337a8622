use crate::{
    Error, Result,
    config::PredictionConfig,
    model::{DEFAULT_THRESHOLD, Label},
};
use rand::Rng;
use serde::Serialize;

/// How a raw model probability becomes the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionPolicy {
    pub threshold: f64,
    /// Half-width of the uniform cosmetic offset added to the probability.
    pub jitter: f64,
    pub max_batch: usize,
}

impl Default for PredictionPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            jitter: 0.05,
            max_batch: 10,
        }
    }
}

impl PredictionPolicy {
    pub fn from_config(config: &PredictionConfig) -> Self {
        Self {
            threshold: config.threshold,
            jitter: config.jitter,
            max_batch: config.max_batch,
        }
    }

    /// No jitter, default threshold. Output equals the model's probability.
    pub fn exact() -> Self {
        Self {
            jitter: 0.0,
            ..Self::default()
        }
    }

    pub fn draw_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.jitter > 0.0 {
            rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }

    pub fn check_batch_size(&self, len: usize) -> Result<()> {
        if len == 0 || len > self.max_batch {
            return Err(Error::invalid_input(format!(
                "batch must contain between 1 and {} passengers, got {}",
                self.max_batch, len
            )));
        }
        Ok(())
    }
}

/// Adds `offset` to `probability` and clamps to `[0, 1]`.
pub fn apply_jitter(probability: f64, offset: f64) -> f64 {
    (probability + offset).clamp(0.0, 1.0)
}

/// `Survive` iff `probability >= threshold`.
pub fn decide(probability: f64, threshold: f64) -> Label {
    Label::from_probability(probability, threshold)
}
