//! Domain Layer
//!
//! Pure logic of the footprint calculator and the chat relay's contracts.
//!
//! ## Structure
//!
//! - `entities/` - Factor table, inputs, results, chat exchanges
//! - `value_objects/` - Category, Vehicle, View
//! - `services/` - Calculator and typo suggestions
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
