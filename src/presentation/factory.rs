//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{CalculateUseCase, ChatRelay, ChatSettings};
use crate::config::{self, Config};
use crate::domain::ports::FactorSource;
use crate::error::FootprintResult;
use crate::infrastructure::{BuiltinFactors, TomlFactorFile, UreqTransport};

/// Type alias for the relay wired to the real HTTP transport
pub type ConcreteChatRelay = ChatRelay<UreqTransport>;

/// The configured factor source: `override_path`, then `factors.path`, else built-in
pub fn factor_source(config: &Config, override_path: Option<&Path>) -> Box<dyn FactorSource> {
    match override_path.or(config.factors.path.as_deref()) {
        Some(path) => Box::new(TomlFactorFile::new(path)),
        None => Box::new(BuiltinFactors),
    }
}

/// Create a calculate use case with the factor table loaded
pub fn create_calculate_use_case(
    config: &Config,
    override_path: Option<&Path>,
) -> FootprintResult<CalculateUseCase> {
    let source = factor_source(config, override_path);
    CalculateUseCase::from_source(source.as_ref())
}

/// Create a chat relay; the credential is read from the environment here
pub fn create_chat_relay(config: &Config) -> ConcreteChatRelay {
    create_chat_relay_with(config::chat_settings(config))
}

/// Create a chat relay from explicit settings
pub fn create_chat_relay_with(settings: ChatSettings) -> ConcreteChatRelay {
    ChatRelay::new(settings, UreqTransport::new())
}
