//! Emission factor sources

mod builtin;
mod toml_source;

pub use builtin::BuiltinFactors;
pub use toml_source::TomlFactorFile;
