//! Calculate Use Case
//!
//! Owns the factor table for the lifetime of the process. The shell reads its
//! region and vehicle choices from here, so every submitted combination is one
//! the table can answer.

mod use_case;

pub use use_case::CalculateUseCase;
