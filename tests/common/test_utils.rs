use std::sync::Arc;
use titanic_predictor::{
    model::{Classifier, LogisticModel},
    passenger::{PassengerClass, PassengerInput, Sex},
    predict::{PredictionPolicy, PredictionService},
};

/// Path of the model artifact shipped with the repository
pub const SAMPLE_MODEL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/models/titanic_model.json");

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

model:
  path: "models/titanic_model.json"

prediction:
  threshold: 0.5
  jitter: 0.05
  max_batch: 10
"#;

/// Configuration with only the required fields
pub const MINIMAL_CONFIG_YAML: &str = r#"
model:
  path: "/opt/models/titanic.json"
"#;

pub fn sample_model() -> LogisticModel {
    LogisticModel::from_path(SAMPLE_MODEL_PATH).expect("sample model artifact should load")
}

pub fn service_with(classifier: impl Classifier + 'static, policy: PredictionPolicy) -> PredictionService {
    PredictionService::new(Arc::new(classifier), policy)
}

pub fn rose() -> PassengerInput {
    PassengerInput::new("Rose", PassengerClass::First, Sex::Female, 25)
}

pub fn jack() -> PassengerInput {
    PassengerInput::new("Jack", PassengerClass::Third, Sex::Male, 20)
}

/// `count` passengers with distinct ages 10, 15, 20, ...
pub fn passengers(count: usize) -> Vec<PassengerInput> {
    (0..count)
        .map(|i| {
            let class = PassengerClass::ALL[i % 3];
            let sex = Sex::ALL[i % 2];
            PassengerInput::new(format!("Passenger {}", i + 1), class, sex, 10 + 5 * i as u8)
        })
        .collect()
}
