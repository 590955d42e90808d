//! Command handlers, one module per subcommand
//!
//! Handlers take a [`CommandContext`] and print either text or NDJSON events
//! depending on `--json`.

pub mod calculate;
pub mod chat;
pub mod factors;
pub mod interactive;
pub mod pages;

use std::path::PathBuf;

use footprint::config::Config;
use footprint::presentation::factory::{self, ConcreteChatRelay};
use footprint::{CalculateUseCase, FootprintResult};

use crate::ui::context::UiContext;

/// Everything a handler needs, resolved once in `main`
pub struct CommandContext {
    pub config: Config,
    pub ui: UiContext,
    factors_override: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: Config, ui: UiContext, factors_override: Option<PathBuf>) -> Self {
        Self {
            config,
            ui,
            factors_override,
        }
    }

    /// Loads the factor table (`--factors`, then `factors.path`, else built-in)
    pub fn calculate_use_case(&self) -> FootprintResult<CalculateUseCase> {
        factory::create_calculate_use_case(&self.config, self.factors_override.as_deref())
    }

    pub fn chat_relay(&self) -> ConcreteChatRelay {
        factory::create_chat_relay(&self.config)
    }

    /// Configured region to preselect, if any
    pub fn preferred_region(&self) -> Option<&str> {
        self.config.factors.default_region.as_deref()
    }
}
