//! Footprint - personal carbon footprint calculator and sustainability chat
//!
//! Estimates a yearly CO2 footprint from a handful of lifestyle inputs using a
//! per-region emission factor table, and relays free-text sustainability
//! questions to a conversational API.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CalculateUseCase, ChatOutcome, ChatRelay, ChatSettings};
pub use config::Config;
pub use domain::entities::{EmissionFactorTable, EmissionResult, UserInputs};
pub use domain::value_objects::{Category, Vehicle, View};
pub use error::{ConfigurationError, FootprintError, FootprintResult};
