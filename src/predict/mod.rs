mod policy;
mod service;

pub use policy::{PredictionPolicy, apply_jitter, decide};
pub use service::{Prediction, PredictionService};
