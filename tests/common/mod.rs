//! Common test utilities for footprint CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories plus a binary runner
//! - `OneShotServer`: a local HTTP endpoint that answers exactly one request

#![allow(dead_code)]

pub mod env;
pub mod server;

pub use env::*;
pub use server::*;
