//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - Outbound HTTP for the chat relay (ureq)
//! - `factors/` - Emission factor sources (built-in table, TOML file)

pub mod factors;
pub mod http;

// Re-export for convenience
pub use factors::{BuiltinFactors, TomlFactorFile};
pub use http::UreqTransport;
