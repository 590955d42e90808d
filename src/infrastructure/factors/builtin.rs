use crate::domain::entities::EmissionFactorTable;
use crate::domain::ports::FactorSource;
use crate::error::FootprintResult;

/// The compiled-in single-region table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFactors;

impl FactorSource for BuiltinFactors {
    fn load(&self) -> FootprintResult<EmissionFactorTable> {
        Ok(EmissionFactorTable::builtin())
    }

    fn describe(&self) -> String {
        "built-in".to_string()
    }
}
