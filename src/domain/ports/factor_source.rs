//! FactorSource port - where the emission factor table comes from
//!
//! The table is injected rather than compiled in, so adding a region is a
//! data change.

use crate::domain::entities::EmissionFactorTable;
use crate::error::FootprintResult;

pub trait FactorSource {
    /// Load and validate the table
    fn load(&self) -> FootprintResult<EmissionFactorTable>;

    /// Human-readable origin ("built-in", a file path, ...)
    fn describe(&self) -> String;
}
