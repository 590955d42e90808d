//! Configuration module for footprint
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOOTPRINT_*, plus the credential variable)
//! 3. `--config PATH`, else `./footprint.toml`, else the user config
//!    (`$XDG_CONFIG_HOME/footprint/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::EnvVarValidator;
pub use loader::{
    apply_overrides, chat_settings, chat_settings_with, user_config_path, ConfigWarning,
    LoadedConfig, ENV_CHAT_ENDPOINT, ENV_COLOR, ENV_FACTORS, PROJECT_CONFIG_FILE,
};
pub use types::{ChatConfig, ColorMode, Config, FactorsConfig, OutputConfig};
