//! Configuration discovery, loading and environment overrides

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::{ApiKey, ChatSettings};
use crate::domain::services::closest_match;
use crate::error::{FootprintError, FootprintResult};

use super::env_validator::EnvVarValidator;
use super::types::{ColorMode, Config};

/// Settings file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "footprint.toml";

pub const ENV_CHAT_ENDPOINT: &str = "FOOTPRINT_CHAT_ENDPOINT";
pub const ENV_FACTORS: &str = "FOOTPRINT_FACTORS";
pub const ENV_COLOR: &str = "FOOTPRINT_COLOR";

const KNOWN_KEYS: &[&str] = &[
    "chat",
    "endpoint",
    "api_key_env",
    "api_key",
    "factors",
    "path",
    "default_region",
    "output",
    "color",
    "unicode",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when running on defaults
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `factors.path` is resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> FootprintResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FootprintError::InvalidConfig {
        file: path.to_path_buf(),
        message: format!("cannot read file: {}", e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FootprintError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(factors) = config.factors.path.take() {
        config.factors.path = Some(match path.parent() {
            Some(dir) if factors.is_relative() => dir.join(factors),
            _ => factors,
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                suggestion: suggest_key(&key),
                line: find_line_number(&content, &key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `explicit`, then `./footprint.toml`, then the user config, else
/// defaults. Environment overrides are applied last.
///
/// An explicit path must exist; discovered files only need to parse.
pub fn load_or_default(explicit: Option<&Path>) -> FootprintResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(),
    };

    let loaded = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                warnings,
                path: Some(path),
            }
        }
        None => {
            debug!("no config file found, using defaults");
            LoadedConfig::default()
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

fn discover() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    user_config_path().filter(|p| p.is_file())
}

/// `$XDG_CONFIG_HOME/footprint/config.toml`, or the platform config dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("footprint").join("config.toml"))
}

/// Apply environment variable overrides (FOOTPRINT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Overrides from an arbitrary variable lookup; invalid values are reported
/// to `writer` and ignored.
pub fn apply_overrides<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(endpoint) = lookup(ENV_CHAT_ENDPOINT).filter(|v| !v.trim().is_empty()) {
        config.chat.endpoint = endpoint.trim().to_string();
    }

    if let Some(path) = lookup(ENV_FACTORS).filter(|v| !v.trim().is_empty()) {
        config.factors.path = Some(PathBuf::from(path.trim()));
    }

    if let Some(color) = lookup(ENV_COLOR) {
        let validator = EnvVarValidator::new(ENV_COLOR, &ColorMode::NAMES);
        config.output.color =
            validator.parse_with_writer(&color, ColorMode::parse, config.output.color, writer);
    }

    config
}

/// Chat settings with the credential read from the process environment
pub fn chat_settings(config: &Config) -> ChatSettings {
    chat_settings_with(config, |name| std::env::var(name).ok())
}

/// The variable named by `chat.api_key_env` wins over `chat.api_key`.
pub fn chat_settings_with<F>(config: &Config, lookup: F) -> ChatSettings
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = lookup(&config.chat.api_key_env)
        .and_then(ApiKey::new)
        .or_else(|| config.chat.api_key.clone().and_then(ApiKey::new));

    ChatSettings::new(config.chat.endpoint.clone(), api_key)
        .with_api_key_env(config.chat.api_key_env.clone())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    closest_match(unknown, KNOWN_KEYS.iter().copied(), 2)
        .filter(|candidate| *candidate != unknown)
        .map(str::to_string)
}
