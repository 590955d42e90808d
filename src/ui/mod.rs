//! Terminal rendering for the binary
//!
//! - `theme` - colors, icons, borders, dialoguer theme
//! - `primitives` / `widgets` / `blocks` - building blocks, smallest first
//! - `views` - one renderer per page
//! - `context` - color/unicode decisions for the current run

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
