mod classifier;
mod logistic;
mod types;

pub use classifier::{Classifier, checked_probability};
#[cfg(test)]
pub use classifier::MockClassifier;
pub use logistic::LogisticModel;
pub use types::*;
