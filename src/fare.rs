//! Fare synthesis.
//!
//! The model was trained with a fare column but the form never asks for one,
//! so a plausible fare is derived from class and sex: a fixed base fare per
//! (class, sex) pair plus uniform noise.

use crate::passenger::{PassengerClass, Sex};
use rand::Rng;

/// Half-width of the uniform noise window around the base fare.
pub const FARE_SPREAD: f64 = 5.0;

/// Base fare in pounds for a (class, sex) pair.
pub fn base_fare(class: PassengerClass, sex: Sex) -> f64 {
    match (class, sex) {
        (PassengerClass::First, Sex::Male) => 70.0,
        (PassengerClass::First, Sex::Female) => 80.0,
        (PassengerClass::Second, Sex::Male) => 35.0,
        (PassengerClass::Second, Sex::Female) => 40.0,
        (PassengerClass::Third, Sex::Male) => 13.0,
        (PassengerClass::Third, Sex::Female) => 16.0,
    }
}

/// Base fare perturbed by `U[-FARE_SPREAD, FARE_SPREAD]`.
pub fn synthesize_fare<R: Rng + ?Sized>(class: PassengerClass, sex: Sex, rng: &mut R) -> f64 {
    let base = base_fare(class, sex);
    base + rng.gen_range(-FARE_SPREAD..=FARE_SPREAD)
}
