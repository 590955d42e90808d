//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod calculator;
pub mod similarity;

pub use calculator::compute;
pub use similarity::{closest_match, levenshtein};
