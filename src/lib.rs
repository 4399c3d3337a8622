pub mod config;
pub mod error;
pub mod fare;
pub mod model;
pub mod passenger;
pub mod predict;
pub mod present;
pub mod server;

pub use error::{Error, Result};
