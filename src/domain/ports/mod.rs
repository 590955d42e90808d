//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod chat_transport;
pub mod factor_source;

pub use chat_transport::{ChatTransport, TransportError, TransportResponse};
pub use factor_source::FactorSource;
