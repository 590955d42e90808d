//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Calculator input bounds shared by flags and prompts
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `sliders` - Numeric input bounds and defaults

pub mod cli;
pub mod factory;
pub mod sliders;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_calculate_use_case, create_chat_relay};
