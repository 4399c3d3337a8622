use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 80;

/// Number of columns in the model's feature vector.
pub const FEATURE_COUNT: usize = 4;

/// Column order of [`FeatureVector`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["pclass", "sex", "age", "fare"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PassengerClass {
    First,
    Second,
    Third,
}

impl PassengerClass {
    pub const ALL: [PassengerClass; 3] = [Self::First, Self::Second, Self::Third];

    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl TryFrom<u8> for PassengerClass {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(format!("passenger class must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<PassengerClass> for u8 {
    fn from(class: PassengerClass) -> Self {
        class.number()
    }
}

impl fmt::Display for PassengerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Self::Male, Self::Female];

    /// Model encoding: male = 0, female = 1.
    pub fn code(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "pclass", alias = "class")]
    pub class: PassengerClass,
    pub sex: Sex,
    pub age: u8,
}

impl PassengerInput {
    pub fn new(name: impl Into<String>, class: PassengerClass, sex: Sex, age: u8) -> Self {
        Self {
            name: name.into(),
            class,
            sex,
            age,
        }
    }

    /// Passenger with uniformly drawn class, sex and age.
    pub fn random<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Self {
        let class = PassengerClass::ALL[rng.gen_range(0..PassengerClass::ALL.len())];
        let sex = Sex::ALL[rng.gen_range(0..Sex::ALL.len())];
        let age = rng.gen_range(MIN_AGE..=MAX_AGE);
        Self::new(name, class, sex, age)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(crate::Error::invalid_input(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}, got {}",
                self.age
            )));
        }
        Ok(())
    }

    /// Name used in rendered output; blank names fall back to "Passenger".
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() { "Passenger" } else { trimmed }
    }

    pub fn features(&self, fare: f64) -> FeatureVector {
        FeatureVector::new(self.class, self.sex, self.age, fare)
    }
}

/// Positional model input: `[pclass, sex, age, fare]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(class: PassengerClass, sex: Sex, age: u8, fare: f64) -> Self {
        Self([
            f64::from(class.number()),
            f64::from(sex.code()),
            f64::from(age),
            fare,
        ])
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn fare(&self) -> f64 {
        self.0[3]
    }
}
