//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod view;

pub use category::{Category, Vehicle};
pub use view::View;
