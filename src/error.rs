//! Error types for footprint
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Category;

/// Result type alias for footprint operations
pub type FootprintResult<T> = Result<T, FootprintError>;

/// Emission factor table misuse.
///
/// These are invariant violations rather than user mistakes: the shell only
/// ever offers regions and vehicles read from the same table it looks up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Region is not a key of the table
    #[error("unknown region '{region}'{}", did_you_mean(.suggestion))]
    UnknownRegion {
        region: String,
        suggestion: Option<String>,
    },

    /// Region exists but has no factor for the category
    #[error("region '{region}' has no emission factor for '{category}'")]
    MissingFactor { region: String, category: Category },

    /// Factor is zero, negative, or not a number
    #[error("emission factor for '{category}' in region '{region}' must be a positive number, got {value}")]
    InvalidFactor {
        region: String,
        category: Category,
        value: f64,
    },

    /// Region lacks a fixed category, or every transport category
    #[error("region '{region}' is incomplete: missing {}", describe_missing(.missing))]
    IncompleteRegion {
        region: String,
        missing: Vec<Category>,
    },

    /// Table holds no regions at all
    #[error("emission factor table has no regions")]
    EmptyTable,
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

fn describe_missing(missing: &[Category]) -> String {
    let transport = Category::ALL
        .iter()
        .filter(|c| c.is_transport())
        .all(|c| missing.contains(c));
    let mut parts: Vec<&str> = missing
        .iter()
        .filter(|c| !c.is_transport())
        .map(Category::name)
        .collect();
    if transport {
        parts.push("a transport factor (Bike, Car or Bus)");
    }
    parts.join(", ")
}

/// Main error type for footprint operations
#[derive(Error, Debug)]
pub enum FootprintError {
    /// Factor table lookup or construction failed
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Settings file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Factor table file could not be parsed
    #[error("invalid emission factor file {file}: {message}")]
    InvalidFactorFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
