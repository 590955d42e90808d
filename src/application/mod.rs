//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CalculateUseCase` - Holds the loaded factor table, offers the form choices, runs the calculator
//! - `ChatRelay` - Sends one prompt to the conversational API and turns the answer into a reply

pub mod calculate;
pub mod chat;

pub use calculate::CalculateUseCase;
pub use chat::{
    ApiKey, ChatError, ChatOutcome, ChatRelay, ChatSettings, DEFAULT_API_KEY_ENV,
    DEFAULT_CHAT_ENDPOINT, FALLBACK_REPLY,
};
