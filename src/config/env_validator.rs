//! Environment variable validation with typo suggestions
//!
//! Invalid values never abort: a warning is written and the previous value
//! is kept.

use std::io::Write;

use crate::domain::services::closest_match;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` if invalid (warning goes to `writer`)
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name,
                    value,
                    self.suggest(value)
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                default
            }
        }
    }

    fn suggest(&self, value: &str) -> String {
        match closest_match(value, self.valid_values.iter().copied(), 2) {
            Some(suggested) if !suggested.eq_ignore_ascii_case(value) => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}
