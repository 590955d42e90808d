//! Domain Entities
//!
//! Value-carrying types for the calculator and the chat relay.

pub mod chat;
pub mod emission;
pub mod factor_table;
pub mod inputs;

pub use chat::{ChatExchange, ReplyKind};
pub use emission::{round2, EmissionResult};
pub use factor_table::{EmissionFactorTable, RegionFactors, BUILTIN_REGION};
pub use inputs::{AnnualQuantities, UserInputs};
